mod central_panel;
mod property_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use property_panel::property_panel;
pub use tools_panel::tools_panel;
