use std::io::{self, Write};
use std::sync::Arc;

use eyre::Result;
use tracing_subscriber::EnvFilter;

use tipul_app::app::App;
use tipul_app::screens;
use tipul_auth::error::AuthError;
use tipul_data::directory::Directory;
use tipul_data::error::DataError;
use tipul_data::memory::{Latency, MemoryDirectory};
use tipul_router::resolve::Screen;

/// Development console standing in for the SPA chrome: drives the same
/// shell, session, and screens the client does, and prints view models as
/// JSON.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let directory: Arc<dyn Directory> = Arc::new(MemoryDirectory::seeded(Latency::Simulated));
    let mut app = App::new(directory);

    println!("tipul console: login <email> <password> | logout | go <path> | show | quit");
    render(&app).await;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["login", email, password] => match app.session.login(email, password).await {
                Ok(()) => render(&app).await,
                Err(AuthError::InvalidCredentials) => println!("invalid credentials"),
                Err(e) => println!("login failed: {e}"),
            },
            ["logout"] => {
                app.session.logout();
                render(&app).await;
            }
            ["go", path] => {
                app.router.navigate(path);
                render(&app).await;
            }
            ["show"] => render(&app).await,
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => println!("unknown command"),
        }
    }

    Ok(())
}

/// Settle the route and print the mounted screen. Data errors degrade to
/// an inline message; they never take the console down.
async fn render(app: &App) {
    let screen = app.settle();
    println!("[{}]", app.router.current().path());
    if let Err(e) = show_screen(app, screen).await {
        if e.is_not_found() {
            println!("not found");
        } else {
            println!("error: {e}");
        }
    }
}

async fn show_screen(app: &App, screen: Screen) -> Result<(), DataError> {
    if let Screen::Login = screen {
        println!("login screen (try: login admin@clinic.com password)");
        return Ok(());
    }
    let Some(user) = app.session.user() else {
        return Ok(());
    };

    let directory = app.directory();
    match screen {
        Screen::Login => {}
        Screen::Dashboard => {
            print_json(&screens::dashboard::load(directory, user).await?);
        }
        Screen::Patients => {
            print_json(&screens::patients::load(directory, user).await?);
        }
        Screen::PatientProfile { patient_id } | Screen::Billing { patient_id } => {
            print_json(&screens::patient_file::load(directory, patient_id).await?);
        }
        Screen::Settings => {
            print_json(&screens::settings::load(directory, user).await?);
        }
        Screen::WaitingList => {
            let today = jiff::Zoned::now().date();
            print_json(&screens::waiting_list::load(directory, user, today).await?);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("render error: {e}"),
    }
}
