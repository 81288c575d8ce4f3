mod app_state;

pub use app_state::{use_app_context, AppContext};
