use std::net::SocketAddr;

use metro_skill::nextrip::{NexTripClient, NexTripConfig};
use metro_skill::skill::Skill;
use metro_skill::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Create NexTrip client
    let client =
        NexTripClient::new(NexTripConfig::new()).expect("Failed to create NexTrip client");

    // Build app state
    let skill = Skill::new(client);
    let state = AppState::new(skill);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro next-train skill listening on http://{addr}");
    println!();
    println!("Endpoints:");
    println!("  GET  /health - Health check");
    println!("  POST /       - Skill request envelope");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
