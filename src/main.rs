use env_logger::Env;
use scout::{configuration::get_configuration, startup::Application};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let application = Application::build(configuration)?;
    application.run().await?;

    Ok(())
}
