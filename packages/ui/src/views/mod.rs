mod create;
pub use create::CreateView;
