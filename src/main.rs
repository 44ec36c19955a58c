use pubsearch::classify::ClassifierSession;
use pubsearch::client::http::ApiClient;
use pubsearch::client::types::ModelChoice;
use pubsearch::client::{ClassifyBackend, SearchBackend};
use pubsearch::config::ClientConfig;
use pubsearch::session::{PageItem, Phase, SearchSession, SessionEvent};

use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = ClientConfig::from_env();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--api" => {
                config = config.with_base_url(&args[i + 1]);
                i += 2;
            }
            "--page-size" => {
                config.page_size = args[i + 1].parse()?;
                i += 2;
            }
            "--debounce-ms" => {
                config.debounce_delay = Duration::from_millis(args[i + 1].parse()?);
                i += 2;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("pubsearch — connected to {}", config.api_base_url);
    println!("Type to search (commits after {:?} of quiet). :help for commands.", config.debounce_delay);

    let api = Arc::new(ApiClient::new(&config));
    let search_backend: Arc<dyn SearchBackend> = api.clone();
    let classify_backend: Arc<dyn ClassifyBackend> = api;

    let (mut session, mut events) = SearchSession::new(search_backend, &config);
    let mut classifier = ClassifierSession::new(classify_backend, ModelChoice::NaiveBayes);
    classifier.refresh_model_info().await;

    // Load everything up front, like the freshly opened search view does.
    session.mount();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(line.trim(), &mut session, &mut classifier).await {
                    break;
                }
            }
            event = events.recv() => {
                let Some(event) = event else { break };
                let completed = matches!(event, SessionEvent::SearchCompleted { .. });
                session.handle_event(event);
                if completed {
                    render(&session);
                }
            }
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--api <url>] [--page-size <n>] [--debounce-ms <n>]", program);
    eprintln!("Example: {} --api http://localhost:8000 --debounce-ms 300", program);
}

/// Applies one line of input. Returns false when the loop should exit.
async fn handle_line(
    line: &str,
    session: &mut SearchSession,
    classifier: &mut ClassifierSession,
) -> bool {
    match line.split_once(' ') {
        _ if line == ":quit" || line == ":q" => return false,
        _ if line == ":help" => {
            println!(":submit | :clear | :page <n> | :sort <relevance|date|title> <asc|desc>");
            println!(":classify <text> | :model <naive_bayes|logistic_regression> | :info | :quit");
        }
        _ if line == ":submit" => session.submit(),
        _ if line == ":clear" => session.clear(),
        Some((":page", number)) => match number.trim().parse() {
            Ok(page) => session.change_page(page),
            Err(_) => println!("usage: :page <n>"),
        },
        Some((":sort", rest)) => match parse_sort(rest) {
            Some(spec) => {
                session.set_sort(spec);
                render(session);
            }
            None => println!("usage: :sort <relevance|date|title> <asc|desc>"),
        },
        Some((":classify", text)) => {
            if classifier.classify(text).await.is_ok() {
                render_classification(classifier);
            } else if let Some(message) = classifier.error() {
                println!("classification failed: {}", message);
            }
        }
        Some((":model", choice)) => match ModelChoice::parse(choice.trim()) {
            Some(model) => {
                classifier.set_model(model).await;
                render_model_info(classifier);
            }
            None => println!("unknown model: {}", choice),
        },
        _ if line == ":info" => render_model_info(classifier),
        _ if line.starts_with(':') => println!("unknown command: {}", line),
        // Anything else is keystrokes; the debounce timer commits them.
        _ => session.input(line),
    }
    true
}

fn parse_sort(rest: &str) -> Option<pubsearch::session::SortSpec> {
    use pubsearch::session::{SortDirection, SortField};

    let mut parts = rest.split_whitespace();
    let field = match parts.next()? {
        "relevance" => SortField::Relevance,
        "date" => SortField::PublishedDate,
        "title" => SortField::Title,
        _ => return None,
    };
    let direction = match parts.next()? {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        _ => return None,
    };
    Some(pubsearch::session::SortSpec { field, direction })
}

fn render(session: &SearchSession) {
    match session.phase() {
        Phase::Failed => {
            println!(
                "search failed: {}",
                session.error().unwrap_or("unknown error")
            );
            return;
        }
        Phase::Loading => {
            println!("loading…");
            return;
        }
        Phase::Idle => return,
        Phase::Ready => {}
    }

    if session.results().is_empty() {
        println!("No results for {:?}.", session.debounced_query());
        return;
    }

    let first_index = session.displayed_range().map(|(start, _)| start).unwrap_or(1);
    for (offset, publication) in session.results().iter().enumerate() {
        let authors: Vec<&str> = publication
            .authors
            .iter()
            .map(|author| author.name.as_str())
            .collect();
        println!(
            "{:2}. [{:.2}] {} ({})",
            first_index + offset,
            publication.score,
            publication.title,
            publication.published_date,
        );
        if !authors.is_empty() {
            println!("      {}", authors.join(", "));
        }
    }

    if let Some((start, end)) = session.displayed_range() {
        println!(
            "Showing {}–{} of {} results{}",
            start,
            end,
            session.total_results(),
            session
                .last_search_duration()
                .map(|d| format!(" ({:.2}s)", d.as_secs_f64()))
                .unwrap_or_default()
        );
    }

    if session.total_pages() > 1 {
        let strip: Vec<String> = session
            .visible_pages()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(n) if n == session.page() => format!("[{}]", n),
                other => other.to_string(),
            })
            .collect();
        println!("Pages: {}", strip.join(" "));
    }
}

fn render_classification(classifier: &ClassifierSession) {
    let Some(result) = classifier.result() else {
        return;
    };
    println!(
        "Predicted: {} ({:.1}% confidence, {} model)",
        result.predicted_category,
        result.confidence * 100.0,
        result.model_used,
    );

    let mut ranked: Vec<(&String, &f64)> = result.probabilities.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(a.1));
    for (category, probability) in ranked {
        println!("  {:<12} {:>5.1}%", category, probability * 100.0);
    }
    if let Some(explanation) = &result.explanation {
        println!("  {}", explanation);
    }
}

fn render_model_info(classifier: &ClassifierSession) {
    match classifier.model_info() {
        Some(info) => println!(
            "model {} — trained: {}, documents: {}, categories: {}",
            classifier.model().as_str(),
            info.is_trained,
            info.total_documents,
            info.categories.join(", "),
        ),
        None => println!("model {} — no info available", classifier.model().as_str()),
    }
}
