#[tokio::main]
async fn main() -> anyhow::Result<()> {
    study_planner_backend::run().await
}
