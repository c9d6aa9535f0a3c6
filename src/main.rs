//! Wayfinder server binary.
//!
//! Loads configuration, wires the configured adapters behind the ports
//! (falling back to in-process stand-ins when a collaborator is not
//! configured), and serves the REST API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfinder::adapters::ai::{GeminiConfig, GeminiProvider, MockAIProvider};
use wayfinder::adapters::flights::SyntheticFlightInventory;
use wayfinder::adapters::http::{
    api_router, bookings::BookingHandlers, chat::ChatHandlers, flights::FlightHandlers,
    health::HealthState, payments::PaymentHandlers,
};
use wayfinder::adapters::payments::SimulatedPaymentGateway;
use wayfinder::adapters::search::{ElasticsearchConfig, ElasticsearchSearch, StaticCatalogSearch};
use wayfinder::adapters::store::{
    InMemoryBookingRepository, InMemoryConversationStore, PostgresBookingRepository,
    RedisConversationStore,
};
use wayfinder::application::handlers::{
    CreateBookingHandler, ListBookingsHandler, ProcessPaymentHandler, SearchFlightsHandler,
    StreamChatHandler,
};
use wayfinder::config::AppConfig;
use wayfinder::ports::{AIProvider, BookingRepository, ConversationStore, TravelSearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (provider, provider_name): (Arc<dyn AIProvider>, &str) = match &config.ai.api_key {
        Some(key) if !key.is_empty() => {
            let gemini = GeminiProvider::new(
                GeminiConfig::new(key.clone())
                    .with_model(config.ai.model.clone())
                    .with_timeout(config.ai.timeout()),
            )?;
            (Arc::new(gemini), "gemini")
        }
        _ => {
            info!("no AI API key configured; using the mock provider");
            (Arc::new(MockAIProvider::new()), "mock")
        }
    };

    let (search, search_name): (Arc<dyn TravelSearch>, &str) = match &config.search.url {
        Some(url) if !url.is_empty() => {
            let mut es_config = ElasticsearchConfig::new(url.clone(), config.search.index.clone());
            if let Some(api_key) = &config.search.api_key {
                es_config = es_config.with_api_key(api_key.clone());
            }
            (Arc::new(ElasticsearchSearch::new(es_config)?), "elasticsearch")
        }
        _ => {
            info!("no search URL configured; using the static catalog");
            (Arc::new(StaticCatalogSearch::new()), "static-catalog")
        }
    };

    let (store, store_name): (Arc<dyn ConversationStore>, &str) = match &config.redis.url {
        Some(url) if !url.is_empty() => {
            let client = redis::Client::open(url.as_str())?;
            let conn = client.get_multiplexed_tokio_connection().await?;
            (
                Arc::new(RedisConversationStore::new(
                    conn,
                    config.redis.conversation_ttl_secs,
                )),
                "redis",
            )
        }
        _ => {
            info!("no Redis URL configured; conversations are held in memory");
            (Arc::new(InMemoryConversationStore::new()), "in-memory")
        }
    };

    let (bookings_repo, bookings_name): (Arc<dyn BookingRepository>, &str) =
        match &config.database.url {
            Some(url) if !url.is_empty() => {
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .min_connections(config.database.min_connections)
                    .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
                    .connect(url)
                    .await?;
                (Arc::new(PostgresBookingRepository::new(pool)), "postgres")
            }
            _ => {
                info!("no database URL configured; bookings are held in memory");
                (Arc::new(InMemoryBookingRepository::new()), "in-memory")
            }
        };

    let chat = ChatHandlers::new(Arc::new(StreamChatHandler::new(
        provider,
        search,
        store,
        config.search.size as usize,
        config.ai.max_output_tokens,
    )));
    let flights = FlightHandlers::new(Arc::new(SearchFlightsHandler::new(Arc::new(
        SyntheticFlightInventory::new(),
    ))));
    let payments = PaymentHandlers::new(Arc::new(ProcessPaymentHandler::new(Arc::new(
        SimulatedPaymentGateway::new(),
    ))));
    let bookings = BookingHandlers::new(
        Arc::new(CreateBookingHandler::new(bookings_repo.clone())),
        Arc::new(ListBookingsHandler::new(bookings_repo)),
    );
    let health = HealthState {
        ai_provider: provider_name.to_string(),
        search: search_name.to_string(),
        conversation_store: store_name.to_string(),
        booking_store: bookings_name.to_string(),
    };

    let app = api_router(chat, flights, payments, bookings, health, &config.server);

    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
