use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "realty-cli")]
#[command(about = "CLI for the real estate catalog server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "REALTY_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token for authenticated commands
    #[arg(long, env = "REALTY_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a user and print the issued token
    Register {
        email: String,
        password: String,
        /// Role recorded on the account
        #[arg(long, default_value = "user")]
        role: String,
    },

    /// Log in and print the issued token
    Login { email: String, password: String },

    /// Create an owner
    CreateOwner {
        name: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        photo: String,
    },

    /// Create a property
    CreateProperty {
        name: String,
        /// Owner id the property belongs to
        #[arg(long)]
        owner_id: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long, default_value = "")]
        state: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        zip_code: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "USD")]
        currency: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        area: f64,
    },

    /// Search the catalog
    Search {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        owner_id: Option<String>,
        #[arg(long)]
        price_min: Option<f64>,
        #[arg(long)]
        price_max: Option<f64>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, default_value = "1")]
        page: i64,
        #[arg(long, default_value = "20")]
        page_size: i64,
    },

    /// Seed demo data: one owner plus N properties
    Seed {
        #[arg(long, default_value = "10")]
        count: usize,
    },
}

struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let mut request = self.http.post(format!("{}{path}", self.base_url)).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let payload: Value = response.json().await.context("non-JSON response")?;
        if !status.is_success() {
            anyhow::bail!("{status}: {payload}");
        }
        Ok(payload)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await
            .context("request failed")?;
        let status = response.status();
        let payload: Value = response.json().await.context("non-JSON response")?;
        if !status.is_success() {
            anyhow::bail!("{status}: {payload}");
        }
        Ok(payload)
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let client = Client::new(cli.url.clone(), cli.token.clone());

    match cli.command {
        Commands::Register {
            email,
            password,
            role,
        } => {
            let body = json!({ "email": email, "password": password, "role": role });
            print_json(&client.post("/api/auth/register", body).await?);
        }
        Commands::Login { email, password } => {
            let body = json!({ "email": email, "password": password });
            print_json(&client.post("/api/auth/login", body).await?);
        }
        Commands::CreateOwner {
            name,
            address,
            photo,
        } => {
            let body = json!({ "name": name, "address": address, "photo": photo });
            print_json(&client.post("/api/owners", body).await?);
        }
        Commands::CreateProperty {
            name,
            owner_id,
            street,
            city,
            state,
            country,
            zip_code,
            price,
            currency,
            year,
            area,
        } => {
            let body = json!({
                "name": name,
                "ownerId": owner_id,
                "street": street,
                "city": city,
                "state": state,
                "country": country,
                "zipCode": zip_code,
                "price": price,
                "currency": currency,
                "year": year,
                "area": area,
                "active": true,
            });
            print_json(&client.post("/api/properties", body).await?);
        }
        Commands::Search {
            text,
            owner_id,
            price_min,
            price_max,
            year,
            page,
            page_size,
        } => {
            let mut query: Vec<(&str, String)> = vec![
                ("page", page.to_string()),
                ("pageSize", page_size.to_string()),
            ];
            if let Some(text) = text {
                query.push(("text", text));
            }
            if let Some(owner_id) = owner_id {
                query.push(("ownerId", owner_id));
            }
            if let Some(min) = price_min {
                query.push(("priceMin", min.to_string()));
            }
            if let Some(max) = price_max {
                query.push(("priceMax", max.to_string()));
            }
            if let Some(year) = year {
                query.push(("year", year.to_string()));
            }
            print_json(&client.get("/api/properties", &query).await?);
        }
        Commands::Seed { count } => {
            let owner = client
                .post(
                    "/api/owners",
                    json!({ "name": "Demo Owner", "address": "1 Demo Way", "photo": "" }),
                )
                .await?;
            let owner_id = owner["id"]
                .as_str()
                .context("owner response missing id")?
                .to_string();

            for i in 0..count {
                let body = json!({
                    "name": format!("Demo Property {}", i + 1),
                    "ownerId": owner_id,
                    "street": format!("{} Main St", 100 + i),
                    "city": "Springfield",
                    "state": "IL",
                    "country": "USA",
                    "zipCode": "62701",
                    "price": 100_000.0 + (i as f64) * 5_000.0,
                    "currency": "USD",
                    "year": 2000 + (i as i32 % 25),
                    "area": 80.0 + (i as f64) * 10.0,
                    "active": true,
                });
                client.post("/api/properties", body).await?;
            }
            println!("Seeded {count} properties for owner {owner_id}");
        }
    }

    Ok(())
}
