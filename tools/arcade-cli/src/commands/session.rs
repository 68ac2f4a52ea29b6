//! Interactive storefront session.
//!
//! Reads one command per line from stdin and feeds the resulting page
//! events to [`Storefront::run`]. Autoplay keeps running in between.

use std::rc::Rc;

use anyhow::{bail, Context as _, Result};
use arcade_carousel::{KeyPress, TokioScheduler};
use arcade_commerce::ProductId;
use arcade_storefront::{games_catalog, StoreBackend, Storefront, StorefrontEvent, UiEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use super::SessionArgs;
use crate::context::Context;
use crate::output::Output;

const HELP: &str = "commands: next | prev | goto N | key NAME | swipe FROM TO | open ID | buy | \
close | backdrop | cart | hide | remove N | search [TEXT] | help | quit";

/// What one input line asks for.
#[derive(Debug, PartialEq)]
enum Input {
    Events(Vec<UiEvent>),
    Help,
    Quit,
}

/// Run the session until stdin closes or `quit` is entered.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(dir) = args.storage_dir {
        config.cart.storage_dir = Some(dir);
    }
    if let Some(ms) = args.autoplay_ms {
        config.carousel.autoplay_interval_ms = ms;
    }

    let store = StoreBackend::from_config(&config.cart).context("Failed to open cart storage")?;
    let (scheduler, ticks) = TokioScheduler::new();
    let mut page = Storefront::new(Rc::new(games_catalog()?), store, scheduler, &config)?;

    let output = ctx.output;
    page.subscribe(move |event: &StorefrontEvent| output.event(event));

    output.info(HELP);
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let reader = tokio::spawn(read_commands(ui_tx, output));

    page.run(ui_rx, ticks).await;
    reader.await.context("Command reader failed")??;

    output.success(&format!(
        "Session ended with {} item(s) in the cart, total {}",
        page.cart().count(),
        page.cart().total().display()
    ));
    Ok(())
}

async fn read_commands(ui: mpsc::UnboundedSender<UiEvent>, output: Output) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match parse_line(&line) {
            Ok(Input::Events(events)) => {
                for event in events {
                    debug!(?event, "queueing page event");
                    if ui.send(event).is_err() {
                        return Ok(());
                    }
                }
            }
            Ok(Input::Help) => output.info(HELP),
            Ok(Input::Quit) => break,
            Err(e) => output.warn(&format!("{:#}", e)),
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Result<Input> {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match command {
        "" => return Ok(Input::Events(Vec::new())),
        "help" | "?" => return Ok(Input::Help),
        "quit" | "exit" => return Ok(Input::Quit),
        "search" => UiEvent::SearchSubmitted(rest.to_string()),
        "swipe" => {
            let mut xs = rest.split_whitespace().map(|x| {
                x.parse::<f64>()
                    .with_context(|| format!("invalid coordinate {:?}", x))
            });
            let (Some(from), Some(to), None) = (xs.next(), xs.next(), xs.next()) else {
                bail!("usage: swipe FROM TO");
            };
            return Ok(Input::Events(vec![
                UiEvent::TouchStart { x: from? },
                UiEvent::TouchEnd { x: to? },
            ]));
        }
        "next" => UiEvent::CarouselNextClicked,
        "prev" => UiEvent::CarouselPrevClicked,
        "goto" => UiEvent::IndicatorClicked(number(rest)?),
        "key" => UiEvent::KeyDown(KeyPress::from_key_name(rest)),
        "open" => UiEvent::GameCardClicked(ProductId::new(number(rest)?)),
        "buy" => UiEvent::ModalBuyClicked,
        "close" => UiEvent::ModalCloseClicked,
        "backdrop" => UiEvent::ModalBackdropClicked,
        "cart" => UiEvent::CartLinkClicked,
        "hide" => UiEvent::CartCloseClicked,
        "remove" => UiEvent::RemoveItemClicked(number(rest)?),
        other => bail!("unknown command {:?} (try help)", other),
    };
    Ok(Input::Events(vec![event]))
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T> {
    arg.parse()
        .map_err(|_| anyhow::anyhow!("expected a number, got {:?}", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(line: &str) -> Vec<UiEvent> {
        match parse_line(line).unwrap() {
            Input::Events(events) => events,
            other => panic!("expected events, got {other:?}"),
        }
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(events("next"), vec![UiEvent::CarouselNextClicked]);
        assert_eq!(events("  prev "), vec![UiEvent::CarouselPrevClicked]);
        assert_eq!(events("goto 4"), vec![UiEvent::IndicatorClicked(4)]);
        assert_eq!(
            events("key ArrowLeft"),
            vec![UiEvent::KeyDown(KeyPress::ArrowLeft)]
        );
        assert_eq!(
            events("swipe 300 240"),
            vec![
                UiEvent::TouchStart { x: 300.0 },
                UiEvent::TouchEnd { x: 240.0 }
            ]
        );
    }

    #[test]
    fn test_cart_commands() {
        assert_eq!(
            events("open 3"),
            vec![UiEvent::GameCardClicked(ProductId::new(3))]
        );
        assert_eq!(events("buy"), vec![UiEvent::ModalBuyClicked]);
        assert_eq!(events("remove 0"), vec![UiEvent::RemoveItemClicked(0)]);
        assert_eq!(events("cart"), vec![UiEvent::CartLinkClicked]);
    }

    #[test]
    fn test_search_keeps_rest_of_line() {
        assert_eq!(
            events("search  dark knight "),
            vec![UiEvent::SearchSubmitted("dark knight".to_string())]
        );
        assert_eq!(events("search"), vec![UiEvent::SearchSubmitted(String::new())]);
    }

    #[test]
    fn test_control_and_errors() {
        assert_eq!(parse_line("quit").unwrap(), Input::Quit);
        assert_eq!(parse_line("help").unwrap(), Input::Help);
        assert!(events("").is_empty());

        assert!(parse_line("open three").is_err());
        assert!(parse_line("swipe 10").is_err());
        assert!(parse_line("swipe 10 x").is_err());
        assert!(parse_line("dance").is_err());
    }
}
