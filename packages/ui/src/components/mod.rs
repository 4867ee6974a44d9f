//! Small building blocks shared by the views.

mod button;
pub use button::Button;

mod input;
pub use input::{Input, Label};

mod tabs;
pub use tabs::{TabContent, TabList, TabTrigger, Tabs};

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, DEFAULT_TOAST_DURATION};
