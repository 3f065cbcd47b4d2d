use reqwest::Client;
use std::collections::{hash_map::RandomState, HashMap};
use verdict::{Application, Config};

pub struct TestApp {
    client: Client,
    address: String,
    configuration: Config,
}

impl TestApp {
    /// GET a route under the `/v1` prefix.
    pub async fn get<T: Into<String>>(&self, path: T) -> reqwest::Response {
        let path = path.into();
        self.get_raw(format!("/v1/{}", path)).await
    }

    /// GET an absolute path, prefix included.
    pub async fn get_raw<T: Into<String>>(&self, path: T) -> reqwest::Response {
        let path = path.into();
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn spawn(config: HashMap<&str, &str>) -> Self {
        let configuration = Config::from(
            HashMap::<&str, &str, RandomState>::from_iter([("HOST", "127.0.0.1"), ("PORT", "0")])
                .into_iter()
                .chain(config)
                .collect::<HashMap<_, _>>(),
        );

        let application = Application::start(&configuration).expect("Failed to start app");
        let address = format!("http://127.0.0.1:{}", application.port());
        actix_web::rt::spawn(application.spawn());

        Self {
            client: Client::new(),
            address,
            configuration,
        }
    }

    pub fn configuration(&self) -> &Config {
        &self.configuration
    }
}
