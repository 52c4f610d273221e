use guardian_auth::{AuthCheckFailed, AuthProvider, SessionFileAuthProvider, StaticAuthProvider};
use guardian_splash::{NavOptions, NavigationSink, SplashController, SplashFrame};
use guardian_splash_config::SplashConfig;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

mod logger;

/// Overrides the auth provider: `home`, `login`, `fail`, or `pending`
const AUTH_OVERRIDE_VAR: &str = "GUARDIAN_SPLASH_AUTH";

/// Prints the navigation command and wakes up the render loop
struct ConsoleNavigationSink {
    navigated: watch::Sender<Option<String>>,
}

impl NavigationSink for ConsoleNavigationSink {
    fn navigate(&self, destination_id: &str, options: &NavOptions) {
        println!();
        println!(
            "→ navigate(\"{}\", clear_entry = \"{}\")",
            destination_id, options.clear_entry
        );
        self.navigated.send_replace(Some(destination_id.to_string()));
    }
}

fn auth_provider(config: &SplashConfig) -> Arc<dyn AuthProvider> {
    let delay = Duration::from_millis(1500);
    let provider: Arc<dyn AuthProvider> = match std::env::var(AUTH_OVERRIDE_VAR).as_deref() {
        Ok("home") => Arc::new(StaticAuthProvider::authenticated().after(delay)),
        Ok("login") => Arc::new(StaticAuthProvider::unauthenticated().after(delay)),
        Ok("fail") => Arc::new(
            StaticAuthProvider::failing(AuthCheckFailed::Network("simulated outage".into()))
                .after(delay),
        ),
        Ok("pending") => Arc::new(guardian_auth::PendingAuthProvider),
        _ => Arc::new(SessionFileAuthProvider::from_config(config)),
    };
    provider
}

fn render(frame: &SplashFrame) -> io::Result<()> {
    let dots = if frame.dot_alpha > 0.66 {
        "●●●"
    } else if frame.dot_alpha > 0.33 {
        "•••"
    } else {
        "···"
    };
    let status = if frame.is_loading { "Loading..." } else { "" };

    let mut stdout = io::stdout().lock();
    write!(
        stdout,
        "\r[G ×{:.2}]  Guardian ×{:.2}  {}  {:<10}",
        frame.logo_scale, frame.text_reveal, dots, status
    )?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_file = logger::init()?;

    log::info!("Starting guardian-splash (logging to {:?})", log_file);

    let config = SplashConfig::load();
    let auth = auth_provider(&config);
    let (navigated_tx, mut navigated_rx) = watch::channel(None);
    let sink = Arc::new(ConsoleNavigationSink {
        navigated: navigated_tx,
    });

    let mut controller = SplashController::new(auth, sink, &config);
    let mut frames = controller.frames();
    controller.start();

    println!("\"Your Safety, Always Accessible ✨\"");
    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = *frames.borrow_and_update();
                render(&frame)?;
            }
            _ = navigated_rx.wait_for(Option::is_some) => break,
            _ = tokio::signal::ctrl_c() => {
                println!();
                log::info!("Interrupted before the splash resolved");
                break;
            }
        }
    }

    if !controller.is_disposed() {
        controller.dispose();
    }
    controller.join().await;

    log::info!("Exiting guardian-splash");
    Ok(())
}
