#[tokio::main(flavor = "current_thread")]
async fn main() {
    transfer_panel::app::cli::run().await;
}
