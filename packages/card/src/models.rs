//! # Card data model
//!
//! Defines the record behind a social card and the small enums the page uses
//! to decide what to show. These types are `Serialize + Deserialize` so they
//! can cross the server/client boundary through Dioxus server functions once a
//! persistence layer exists.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`CardRecord`] | The seven free-text fields of a card. Every field may be empty. |
//! | [`CardField`] | One field of a [`CardRecord`], in form order, with its label, input type and placeholder. |
//! | [`ViewMode`] | Which panel (`edit` or `preview`) is shown in the tabbed layout. |
//! | [`ContactLink`] | A non-empty contact field rendered as a link in the preview. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name shown in the preview while the name field is empty.
pub const PLACEHOLDER_NAME: &str = "Your Name";

/// Profile data shown on a social card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    /// Serialized as `photoUrl`.
    pub photo_url: String,
}

impl CardRecord {
    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        CardField::ALL.iter().all(|f| f.get(self).trim().is_empty())
    }

    /// Copy of this record with one field replaced.
    pub fn with_field(&self, field: CardField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        field.set(&mut next, value);
        next
    }

    /// The name, or [`PLACEHOLDER_NAME`] while it is blank.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            PLACEHOLDER_NAME
        } else {
            name
        }
    }

    /// Up to two uppercase initials taken from the first and last words of
    /// the name. `"?"` when the name is blank.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let Some(first) = words.next() else {
            return "?".to_string();
        };
        let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
        if let Some(last) = words.last() {
            out.extend(last.chars().take(1).flat_map(char::to_uppercase));
        }
        out
    }

    /// The non-empty contact fields in display order.
    pub fn contact_links(&self) -> Vec<ContactLink> {
        [
            (ContactKind::Phone, &self.phone),
            (ContactKind::Email, &self.email),
            (ContactKind::Linkedin, &self.linkedin),
            (ContactKind::Github, &self.github),
            (ContactKind::Portfolio, &self.portfolio),
        ]
        .into_iter()
        .filter_map(|(kind, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| ContactLink {
                kind,
                label: value.to_string(),
                href: kind.href(value),
            })
        })
        .collect()
    }
}

/// One field of a [`CardRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Phone,
    Email,
    Linkedin,
    Github,
    Portfolio,
    PhotoUrl,
}

impl CardField {
    /// Every field, in the order the form shows them.
    pub const ALL: [CardField; 7] = [
        CardField::Name,
        CardField::Phone,
        CardField::Email,
        CardField::Linkedin,
        CardField::Github,
        CardField::Portfolio,
        CardField::PhotoUrl,
    ];

    /// Stable identifier, used for element ids.
    pub fn key(self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Phone => "phone",
            CardField::Email => "email",
            CardField::Linkedin => "linkedin",
            CardField::Github => "github",
            CardField::Portfolio => "portfolio",
            CardField::PhotoUrl => "photoUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardField::Name => "Full Name",
            CardField::Phone => "Phone Number",
            CardField::Email => "Email",
            CardField::Linkedin => "LinkedIn",
            CardField::Github => "GitHub",
            CardField::Portfolio => "Portfolio Website",
            CardField::PhotoUrl => "Photo URL",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            CardField::Phone => "tel",
            CardField::Email => "email",
            CardField::Linkedin | CardField::Github | CardField::Portfolio | CardField::PhotoUrl => {
                "url"
            }
            CardField::Name => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            CardField::Name => "Ada Lovelace",
            CardField::Phone => "+1 (555) 123-4567",
            CardField::Email => "you@example.com",
            CardField::Linkedin => "linkedin.com/in/username",
            CardField::Github => "github.com/username",
            CardField::Portfolio => "yourwebsite.com",
            CardField::PhotoUrl => "https://example.com/photo.jpg",
        }
    }

    pub fn get(self, record: &CardRecord) -> &str {
        match self {
            CardField::Name => &record.name,
            CardField::Phone => &record.phone,
            CardField::Email => &record.email,
            CardField::Linkedin => &record.linkedin,
            CardField::Github => &record.github,
            CardField::Portfolio => &record.portfolio,
            CardField::PhotoUrl => &record.photo_url,
        }
    }

    pub fn set(self, record: &mut CardRecord, value: impl Into<String>) {
        let slot = match self {
            CardField::Name => &mut record.name,
            CardField::Phone => &mut record.phone,
            CardField::Email => &mut record.email,
            CardField::Linkedin => &mut record.linkedin,
            CardField::Github => &mut record.github,
            CardField::Portfolio => &mut record.portfolio,
            CardField::PhotoUrl => &mut record.photo_url,
        };
        *slot = value.into();
    }
}

/// Which panel the tabbed layout shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Edit,
    Preview,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Edit, ViewMode::Preview];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Edit => "edit",
            ViewMode::Preview => "preview",
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Edit => "Edit",
            ViewMode::Preview => "Preview",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Edit => ViewMode::Preview,
            ViewMode::Preview => ViewMode::Edit,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `"edit"` nor `"preview"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownViewMode(pub String);

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view mode: {}", self.0)
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(ViewMode::Edit),
            "preview" => Ok(ViewMode::Preview),
            other => Err(UnknownViewMode(other.to_string())),
        }
    }
}

/// Kind of contact link, which decides its icon and URL scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Phone,
    Email,
    Linkedin,
    Github,
    Portfolio,
}

impl ContactKind {
    fn href(self, value: &str) -> String {
        match self {
            ContactKind::Phone => {
                let dialable: String = value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                format!("tel:{dialable}")
            }
            ContactKind::Email => format!("mailto:{value}"),
            ContactKind::Linkedin | ContactKind::Github | ContactKind::Portfolio => {
                web_url(value)
            }
        }
    }
}

/// A contact field as shown in the preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
}

/// Prefix `https://` when the value carries no scheme.
fn web_url(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_blank() {
        let record = CardRecord::default();
        assert!(record.is_blank());
        for field in CardField::ALL {
            assert_eq!(field.get(&record), "");
        }
    }

    #[test]
    fn test_whitespace_only_record_is_blank() {
        let record = CardRecord {
            name: "  ".to_string(),
            photo_url: " \t".to_string(),
            ..Default::default()
        };
        assert!(record.is_blank());
        assert!(!record.with_field(CardField::Phone, " 555 ").is_blank());
    }

    #[test]
    fn test_with_field_replaces_one_field() {
        let record = CardRecord {
            name: "Ada".to_string(),
            ..Default::default()
        };
        let next = record.with_field(CardField::Github, "github.com/ada");
        assert_eq!(next.name, "Ada");
        assert_eq!(next.github, "github.com/ada");
        // The source record is untouched
        assert_eq!(record.github, "");
    }

    #[test]
    fn test_field_get_set_cover_every_field() {
        let mut record = CardRecord::default();
        for field in CardField::ALL {
            field.set(&mut record, field.key());
        }
        assert_eq!(record.name, "name");
        assert_eq!(record.photo_url, "photoUrl");
        for field in CardField::ALL {
            assert_eq!(field.get(&record), field.key());
        }
        assert!(!record.is_blank());
    }

    #[test]
    fn test_serializes_photo_url_in_camel_case() {
        let record = CardRecord {
            photo_url: "https://example.com/me.png".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["photoUrl"], "https://example.com/me.png");
        assert!(json.get("photo_url").is_none());
    }

    #[test]
    fn test_display_name_and_initials() {
        let mut record = CardRecord::default();
        assert_eq!(record.display_name(), PLACEHOLDER_NAME);
        assert_eq!(record.initials(), "?");

        record.name = "ada".to_string();
        assert_eq!(record.display_name(), "ada");
        assert_eq!(record.initials(), "A");

        record.name = "  Ada King Lovelace ".to_string();
        assert_eq!(record.display_name(), "Ada King Lovelace");
        assert_eq!(record.initials(), "AL");
    }

    #[test]
    fn test_contact_links_skip_empty_fields() {
        let record = CardRecord {
            phone: "+1 (555) 123-4567".to_string(),
            email: "a@b.com".to_string(),
            github: "github.com/ada".to_string(),
            portfolio: "https://ada.dev".to_string(),
            ..Default::default()
        };
        let links = record.contact_links();
        let kinds: Vec<ContactKind> = links.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContactKind::Phone,
                ContactKind::Email,
                ContactKind::Github,
                ContactKind::Portfolio
            ]
        );
        assert_eq!(links[0].href, "tel:+15551234567");
        assert_eq!(links[1].href, "mailto:a@b.com");
        assert_eq!(links[2].href, "https://github.com/ada");
        assert_eq!(links[3].href, "https://ada.dev");
        assert_eq!(links[0].label, "+1 (555) 123-4567");
    }

    #[test]
    fn test_view_mode_strings() {
        assert_eq!(ViewMode::default(), ViewMode::Edit);
        for mode in ViewMode::ALL {
            assert_eq!(mode.to_string().parse::<ViewMode>(), Ok(mode));
        }
        assert_eq!(
            "grid".parse::<ViewMode>(),
            Err(UnknownViewMode("grid".to_string()))
        );
        assert_eq!(ViewMode::Edit.toggle(), ViewMode::Preview);
        assert_eq!(ViewMode::Preview.toggle(), ViewMode::Edit);
    }
}
