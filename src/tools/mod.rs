pub mod farewell;
pub mod greeting;
pub mod weather;

pub use farewell::{farewell, farewell_tool};
pub use greeting::{greet, greeting_tool};
pub use weather::{current_weather_tool, forecast_tool};
