use sirenlink_api::wire::WIRE_SIZE;
use sirenlink_node::app::App;
use sirenlink_node::configs::Settings;
use sirenlink_node::run;
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Failed to load settings.");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let app = App::new(&settings).expect("Failed to bind node identity.");

    // The radio collaborator owns the sender half in deployment builds;
    // here stdin stands in for it, one fixed-size frame at a time.
    let (frames_tx, frames_rx) = mpsc::channel(100);
    tokio::spawn(async move {
        let mut stdin = tokio::io::stdin();
        let mut buffer = [0u8; WIRE_SIZE];

        while stdin.read_exact(&mut buffer).await.is_ok() {
            if frames_tx.send(buffer.to_vec()).await.is_err() {
                break;
            }
        }
    });

    run(app, frames_rx).await;
}
