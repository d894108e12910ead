// Components module - reusable UI building blocks
//
// Panels (focusable, implement the trait system):
// - Product list: table of the catalog
// - Create / edit forms: built on the shared field set
// - Logs panel: system log entries
//
// Shell pieces rendered every frame:
// - Title bar, status bar, toast

pub mod create_form;
pub mod edit_form;
pub mod form;
pub mod logs_panel;
pub mod product_list;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
pub mod toast;

pub use create_form::CreateForm;
pub use edit_form::EditForm;
pub use form::FormError;
pub use logs_panel::LogsPanel;
pub use product_list::ProductList;
pub use toast::Toast;
