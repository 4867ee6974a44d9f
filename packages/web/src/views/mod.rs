mod create;
pub use create::Create;
