use dotenvy::dotenv;
use verdict::{get_subscriber, init_subscriber, Application, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let suscriber = get_subscriber("verdict".into(), "info".into(), std::io::stdout);
    init_subscriber(suscriber);

    let configuration = Config::load()?;

    Application::start(&configuration)?.spawn().await
}
