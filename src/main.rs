use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buscacep::config::Config;
use buscacep::history::FileHistoryRepository;
use buscacep::models::AddressRecord;
use buscacep::notify::TerminalNotifier;
use buscacep::services::ViaCepService;
use buscacep::view::LookupView;

/// Main entry point for the application.
///
/// Initializes logging and configuration, wires the ViaCEP client, the
/// file-backed history repository and the terminal notifier into the
/// lookup view, then runs the interactive loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buscacep=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let service = ViaCepService::new(&config)?;
    let repository = FileHistoryRepository::new(config.history_path.clone());
    let mut view = LookupView::new(service, repository, TerminalNotifier);

    println!("BUSCA CEP");
    println!("Digite um CEP para buscar.");
    println!("Comandos: :history  :select <n>  :clear  :quit");

    let stdin = io::stdin();
    loop {
        print!("cep> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "" => continue,
            ":quit" | ":q" => break,
            ":clear" => view.clear_result(),
            ":history" => render_history(view.history().entries()),
            _ if line.starts_with(":select") => {
                let selected = line[":select".len()..]
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .map(|n| view.select_from_history(n))
                    .unwrap_or(false);
                if selected {
                    render_result(view.current_result());
                } else {
                    println!("Entrada de histórico inválida");
                }
            }
            _ if line.starts_with(':') => {
                println!("Comando desconhecido: {}", line);
            }
            code => {
                view.set_input(code);
                view.submit_lookup(code).await;
                render_result(view.current_result());
            }
        }
    }

    Ok(())
}

/// Renders the result panel, mirroring the fields of the original card.
fn render_result(result: Option<&AddressRecord>) {
    let Some(record) = result else {
        return;
    };

    println!("Resultado da busca:");
    println!("  Cep:         {}", record.code);
    println!("  Logradouro:  {}", record.street);
    println!("  Complemento: {}", record.complement);
    println!("  Bairro:      {}", record.neighborhood);
    println!(
        "  Localidade:  {} - {}",
        record.city, record.state_abbreviation
    );
    println!("  DDD:         {}", record.area_code);
}

fn render_history(entries: &[AddressRecord]) {
    if entries.is_empty() {
        println!("Histórico vazio");
        return;
    }

    println!("Histórico de buscas:");
    for (index, record) in entries.iter().enumerate() {
        println!(
            "  [{}] {} ({} - {})",
            index, record.code, record.city, record.state_abbreviation
        );
    }
}
