use std::path::PathBuf;

use clap::Parser;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

use ragpanel::api::{ApiClient, Backend, UploadFile};
use ragpanel::cli::{resolve_config, Args};
use ragpanel::config::PanelConfig;
use ragpanel::controller::PanelController;
use ragpanel::event::UiEvent;
use ragpanel::format::format_file_size;
use ragpanel::surface::Surface;
use ragpanel::term::TermSurface;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => Some(PanelConfig::load(path)?),
        None => None,
    };
    let config = resolve_config(&args, file_config);

    let client = ApiClient::builder(&config.base_url)
        .connect_timeout(config.connect_timeout())
        .request_timeout(config.request_timeout())
        .build();

    if args.docs {
        print_documents(&client).await;
        return Ok(());
    }

    let mut controller = PanelController::new(client.clone(), TermSurface::new())
        .settle_delay(config.settle_delay());
    controller.init().await;

    if let Some(question) = &args.ask {
        controller.surface_mut().set_question(question);
        controller.dispatch(UiEvent::Submit).await;
        return Ok(());
    }

    if !args.upload.is_empty() {
        let files = load_upload_files(&args.upload).await?;
        controller.dispatch(UiEvent::FilesDropped(files)).await;
        return Ok(());
    }

    run_interactive(&mut controller, &client).await
}

/// Read each path into an opaque upload handle. The panel never inspects
/// file contents, it only forwards them.
async fn load_upload_files(paths: &[PathBuf]) -> std::io::Result<Vec<UploadFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(UploadFile::new(name, bytes));
    }
    Ok(files)
}

async fn print_documents(client: &ApiClient) {
    match client.list_documents().await {
        Ok(docs) => {
            if docs.is_empty() {
                println!("{}", "No documents indexed.".dimmed());
                return;
            }
            for doc in docs {
                let name = doc.original_filename.as_deref().unwrap_or(&doc.filename);
                let size = doc.file_size.map(format_file_size).unwrap_or_default();
                let status = doc.processing_status.as_deref().unwrap_or(if doc.processed {
                    "completed"
                } else {
                    "pending"
                });
                println!("{:>4}  {}  {}  {}", doc.id, name.bright_white(), size.dimmed(), status);
            }
        }
        Err(e) => eprintln!("{} {e}", "Cannot list documents:".bright_red()),
    }
}

async fn delete_document(client: &ApiClient, id: i64) {
    match client.delete_document(id).await {
        Ok(receipt) => println!("{}", receipt.message.bright_green()),
        Err(e) => eprintln!("{} {e}", "Delete failed:".bright_red()),
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  <question>          ask the documents a question");
    println!("  /upload <paths...>  upload files to the index");
    println!("  /status             re-check backend status");
    println!("  /docs               list indexed documents");
    println!("  /rm <id>            delete an indexed document");
    println!("  /quit               exit");
}

async fn run_interactive(
    controller: &mut PanelController<ApiClient, TermSurface>,
    client: &ApiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "RAG PANEL".bright_cyan().bold());
    println!("{} {}", "Backend:".bright_yellow(), client.base_url().bright_white());
    print_help();
    println!();

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());

    while let Some(line) = lines.next().await {
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/status" => controller.dispatch(UiEvent::RefreshStatus).await,
            "/docs" => print_documents(client).await,
            _ if input.starts_with("/rm") => {
                match input.split_whitespace().nth(1).and_then(|s| s.parse::<i64>().ok()) {
                    Some(id) => delete_document(client, id).await,
                    None => eprintln!("{}", "Usage: /rm <id>".bright_red()),
                }
            }
            _ if input.starts_with("/upload") => {
                let paths: Vec<PathBuf> =
                    input.split_whitespace().skip(1).map(PathBuf::from).collect();
                if paths.is_empty() {
                    eprintln!("{}", "Usage: /upload <paths...>".bright_red());
                    continue;
                }
                match load_upload_files(&paths).await {
                    Ok(files) => controller.dispatch(UiEvent::FilesDropped(files)).await,
                    Err(e) => eprintln!("{} {e}", "Cannot read files:".bright_red()),
                }
            }
            _ if input.starts_with('/') => {
                eprintln!("{} {input}", "Unknown command:".bright_red());
            }
            question => {
                controller.surface_mut().set_question(question);
                controller.dispatch(UiEvent::Submit).await;
            }
        }
    }

    Ok(())
}
