//! Account provisioning
//!
//! Creates medical-staff and admin accounts, which have no public sign-up
//! route. Reads the same environment as the server (`.env` included) and
//! goes through the same registration path, so passwords are hashed with the
//! configured bcrypt cost.
//!
//! ```text
//! bloodconnect-provision --role medical-staff --name "Dr Lee" \
//!     --email lee@clinic.org --password s3cret --dob 1985-02-14
//! ```

use clap::Parser;
use std::error::Error;
use std::sync::Arc;

use bloodconnect::backend::auth::{Authenticator, Registration, RolePolicies, SessionManager, SqlCredentialStore};
use bloodconnect::backend::auth::users::ensure_schema;
use bloodconnect::backend::server::config::{connect_database, ServerConfig};
use bloodconnect::shared::Role;

#[derive(Parser, Debug)]
#[command(name = "bloodconnect-provision", about = "Create a medical-staff or admin account")]
struct Args {
    /// Account role: medical-staff or admin
    #[arg(short, long, value_parser = parse_provisioned_role)]
    role: Role,

    #[arg(short, long)]
    name: String,

    #[arg(short, long)]
    email: String,

    #[arg(short, long)]
    password: String,

    /// Date of birth, as stored (e.g. 1985-02-14)
    #[arg(short, long)]
    dob: String,

    /// Overrides DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

fn parse_provisioned_role(value: &str) -> Result<Role, String> {
    match value.parse::<Role>()? {
        Role::Donor => Err("donors register through /sign-up".to_string()),
        role => Ok(role),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(url) = args.database_url {
        config.database_url = url;
    }

    let pool = connect_database(&config.database_url).await?;
    ensure_schema(&pool).await?;

    let store = Arc::new(SqlCredentialStore::new(
        pool,
        RolePolicies::new(config.legacy_plaintext_credentials),
        config.store_timeout,
    ));
    let sessions = Arc::new(SessionManager::new(&config.jwt_secret, config.token_ttl));
    let authenticator = Authenticator::new(store, sessions, config.bcrypt_cost);

    let registration = Registration {
        name: args.name,
        email: args.email,
        password: args.password,
        date_of_birth: args.dob,
    };

    let id = authenticator.register(args.role, registration).await?;
    println!("Created {} account {}", args.role, id);

    Ok(())
}
