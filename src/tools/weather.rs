use crate::tool::{new_tool, Tool, ToolResult};
use crate::weather::{WeatherClient, DEFAULT_FORECAST_DAYS};

/// Name the root agent binds for current-weather lookups.
pub const CURRENT_WEATHER_TOOL: &str = "get_current_weather";

/// Name the root agent binds for forecast lookups.
pub const FORECAST_TOOL: &str = "get_forecast";

/// Registry binding for [`WeatherClient::current`].
///
/// The provider's payload is returned verbatim, including provider-reported
/// errors; only a missing `city` argument or a transport failure becomes an
/// error result.
#[must_use]
pub fn current_weather_tool(client: WeatherClient) -> Tool {
    new_tool(
        CURRENT_WEATHER_TOOL,
        "Retrieves the current weather report for a specified city.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city (e.g., \"New York\", \"London\", \"Tokyo\")."
                }
            },
            "required": ["city"]
        }),
        move |input| {
            let client = client.clone();
            async move {
                let Some(city) = input.get("city").and_then(|v| v.as_str()) else {
                    return ToolResult::error("missing required argument: city");
                };
                match client.current(city).await {
                    Ok(payload) => ToolResult::json(&payload),
                    Err(err) => ToolResult::error(err.to_string()),
                }
            }
        },
    )
}

/// Registry binding for [`WeatherClient::forecast`].
///
/// `days` defaults to the provider's 14-day horizon when the runtime omits it.
#[must_use]
pub fn forecast_tool(client: WeatherClient) -> Tool {
    new_tool(
        FORECAST_TOOL,
        "Retrieves the weather forecast for the next 14 days for a specified city.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city (e.g., \"New York\", \"London\", \"Tokyo\")."
                },
                "days": {
                    "type": "integer",
                    "description": "Forecast horizon in days (defaults to 14)."
                }
            },
            "required": ["city"]
        }),
        move |input| {
            let client = client.clone();
            async move {
                let Some(city) = input.get("city").and_then(|v| v.as_str()) else {
                    return ToolResult::error("missing required argument: city");
                };
                let days = input
                    .get("days")
                    .and_then(|v| v.as_u64())
                    .and_then(|d| u32::try_from(d).ok())
                    .unwrap_or(DEFAULT_FORECAST_DAYS);
                match client.forecast(city, days).await {
                    Ok(payload) => ToolResult::json(&payload),
                    Err(err) => ToolResult::error(err.to_string()),
                }
            }
        },
    )
}
