pub mod agent;
pub mod error;
pub mod team;
pub mod tool;
pub mod tools;
pub mod weather;

// Re-export key types at crate root for ergonomic use.
pub use error::{Error, Result};

pub use agent::AgentDefinition;
pub use team::{farewell_agent, greeting_agent, AgentTeam, TeamBuilder};
pub use tool::{new_tool, Tool, ToolRegistry, ToolResult};
pub use weather::WeatherClient;

// Re-export tool constructors.
pub use tools::{current_weather_tool, farewell_tool, forecast_tool, greeting_tool};
