use crate::agent::AgentDefinition;
use crate::error::{Error, Result};
use crate::tool::ToolRegistry;
use crate::tools::weather::{CURRENT_WEATHER_TOOL, FORECAST_TOOL};
use crate::tools::{current_weather_tool, farewell_tool, forecast_tool, greeting_tool};
use crate::weather::WeatherClient;

/// Name of the coordinating root agent.
pub const ROOT_AGENT_NAME: &str = "weather_agent";

/// Name of the greeting specialist.
pub const GREETING_AGENT_NAME: &str = "greeting_agent";

/// Name of the farewell specialist.
pub const FAREWELL_AGENT_NAME: &str = "farewell_agent";

/// Model tag used for every agent in the standard team.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const GREETING_INSTRUCTION: &str = "You are the Greeting Agent. Your ONLY task is to provide \
    a friendly greeting to the user. Use the 'say_hello' tool to generate the greeting. \
    If the user provides their name, make sure to pass it to the tool. \
    Do not engage in any other conversation or tasks.";

const FAREWELL_INSTRUCTION: &str = "You are the Farewell Agent. Your ONLY task is to provide \
    a polite goodbye message. Use the 'say_goodbye' tool when the user indicates they are \
    leaving or ending the conversation (e.g., using words like 'bye', 'goodbye', 'thanks bye', \
    'see you'). Do not perform any other actions.";

const ROOT_INSTRUCTION: &str = "You are the main Weather Agent coordinating a team. Your \
    primary responsibility is to provide weather information. Use the 'get_current_weather' \
    tool ONLY for specific weather requests (e.g., 'weather in London'). Use the \
    'get_forecast' tool ONLY for specific weather forecast requests (e.g., 'what is the \
    weather in London tomorrow?'). You have specialized sub-agents: 1. 'greeting_agent': \
    Handles simple greetings like 'Hi', 'Hello'. Delegate to it for these. 2. \
    'farewell_agent': Handles simple farewells like 'Bye', 'See you'. Delegate to it for \
    these. Analyze the user's query. If it's a greeting, delegate to 'greeting_agent'. If \
    it's a farewell, delegate to 'farewell_agent'. If it's a weather request, handle it \
    yourself using 'get_current_weather'. If it's a request for future weather forecast, \
    handle it yourself using 'get_forecast'. For anything else, respond appropriately or \
    state you cannot handle it.";

/// Definition of the greeting specialist bound to `say_hello`.
pub fn greeting_agent() -> Result<AgentDefinition> {
    Ok(AgentDefinition::new(
        GREETING_AGENT_NAME,
        DEFAULT_MODEL,
        GREETING_INSTRUCTION,
        "Handles simple greetings and hellos using the 'say_hello' tool.",
    )?
    .with_tool("say_hello"))
}

/// Definition of the farewell specialist bound to `say_goodbye`.
pub fn farewell_agent() -> Result<AgentDefinition> {
    Ok(AgentDefinition::new(
        FAREWELL_AGENT_NAME,
        DEFAULT_MODEL,
        FAREWELL_INSTRUCTION,
        "Handles simple farewells and goodbyes using the 'say_goodbye' tool.",
    )?
    .with_tool("say_goodbye"))
}

/// The fully-wired team: the root definition handed to the orchestration
/// runtime, plus the registry it invokes tools through.
///
/// Constructed once at process start and read-only afterwards.
#[derive(Debug)]
pub struct AgentTeam {
    pub root: AgentDefinition,
    pub registry: ToolRegistry,
}

impl AgentTeam {
    /// Wire the standard team around a weather client: both specialist
    /// sub-agents, both weather tools, and the coordinating root agent.
    ///
    /// Each leaf agent is constructed independently; a failure building one
    /// does not prevent attempting the other, but the root is only built once
    /// every prerequisite exists.
    pub fn standard(client: WeatherClient) -> Result<Self> {
        let mut builder = TeamBuilder::new(ToolRegistry::new(vec![
            greeting_tool(),
            farewell_tool(),
            current_weather_tool(client.clone()),
            forecast_tool(client),
        ]));

        match greeting_agent() {
            Ok(agent) => builder = builder.greeting(agent),
            Err(err) => tracing::warn!(error = %err, "could not create greeting agent"),
        }
        match farewell_agent() {
            Ok(agent) => builder = builder.farewell(agent),
            Err(err) => tracing::warn!(error = %err, "could not create farewell agent"),
        }

        builder.build()
    }
}

/// Assembles the root agent, failing closed when a prerequisite is missing.
///
/// No partial root is ever produced: every missing dependency is reported via
/// a `tracing::warn!` diagnostic and the first one is returned as
/// [`Error::MissingDependency`].
#[derive(Debug)]
pub struct TeamBuilder {
    greeting: Option<AgentDefinition>,
    farewell: Option<AgentDefinition>,
    registry: ToolRegistry,
}

impl TeamBuilder {
    #[must_use]
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            greeting: None,
            farewell: None,
            registry,
        }
    }

    #[must_use]
    pub fn greeting(mut self, agent: AgentDefinition) -> Self {
        self.greeting = Some(agent);
        self
    }

    #[must_use]
    pub fn farewell(mut self, agent: AgentDefinition) -> Self {
        self.farewell = Some(agent);
        self
    }

    /// Check every prerequisite and construct the root agent.
    pub fn build(self) -> Result<AgentTeam> {
        let mut missing: Vec<&str> = Vec::new();
        if self.greeting.is_none() {
            missing.push(GREETING_AGENT_NAME);
        }
        if self.farewell.is_none() {
            missing.push(FAREWELL_AGENT_NAME);
        }
        if !self.registry.contains(CURRENT_WEATHER_TOOL) {
            missing.push(CURRENT_WEATHER_TOOL);
        }
        if !self.registry.contains(FORECAST_TOOL) {
            missing.push(FORECAST_TOOL);
        }

        let (greeting, farewell) = match (self.greeting, self.farewell) {
            (Some(greeting), Some(farewell)) if missing.is_empty() => (greeting, farewell),
            _ => {
                for name in &missing {
                    tracing::warn!(
                        dependency = %name,
                        "cannot create root agent, dependency missing"
                    );
                }
                let name = missing.first().copied().unwrap_or(GREETING_AGENT_NAME);
                return Err(Error::MissingDependency { name: name.into() });
            }
        };

        let root = AgentDefinition::new(
            ROOT_AGENT_NAME,
            DEFAULT_MODEL,
            ROOT_INSTRUCTION,
            "The main coordinator agent. Handles weather requests and delegates \
             greetings/farewells to specialists.",
        )?
        .with_tool(CURRENT_WEATHER_TOOL)
        .with_tool(FORECAST_TOOL)
        .with_sub_agent(greeting)
        .with_sub_agent(farewell);

        Ok(AgentTeam {
            root,
            registry: self.registry,
        })
    }
}
