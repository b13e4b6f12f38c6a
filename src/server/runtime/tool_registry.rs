use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, ErrorData, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer,
};

use crate::{
    server::config::ServerConfig,
    tools::{
        self,
        weather::{self, GetAlertsRequest, GetForecastRequest, GreetRequest, WeatherClient},
        ServerToolRouter,
    },
};

use super::resources;

#[derive(Clone)]
pub struct WeatherServer {
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
    weather: Arc<WeatherClient>,
    forecast_periods: usize,
}

impl WeatherServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        let weather = WeatherClient::new(&config.weather);
        Self {
            instructions: Arc::new(instructions),
            tool_router: router,
            weather: Arc::new(weather),
            forecast_periods: config.weather.forecast_periods,
        }
    }
}

#[tool_router(router = tool_router)]
impl WeatherServer {
    #[tool(name = "greet", description = "Greet someone by name")]
    async fn greet(
        &self,
        Parameters(request): Parameters<GreetRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let message = weather::greet(&request.name).await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(
        name = "get_alerts",
        description = "Get active weather alerts for a US state"
    )]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = weather::active_alerts(&self.weather, &request.state).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "get_forecast",
        description = "Get the weather forecast for a latitude/longitude pair"
    )]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let text = weather::forecast(
            &self.weather,
            request.latitude,
            request.longitude,
            self.forecast_periods,
        )
        .await
        .map_err(weather::weather_error_to_error_data)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WeatherServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(resources::list_resources())
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        resources::read_resource(&uri)
    }
}
