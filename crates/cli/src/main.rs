use anyhow::{bail, Context};
use cardface_core::{
    compose_deck, parse_card_name, Card, CardComposer, GlobalTable, SpriteCatalog, VisualElement,
};
use cardface_data::load_assets;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const ASSETS_ENV: &str = "CARDFACE_ASSETS";
const USAGE: &str = "usage: cardface [--assets DIR] [--face-down] [--json] [--log-json] (--deck | CARD...)
  CARD is a suit letter followed by a rank, e.g. C1, H10, S13";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Deck,
    Cards(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    assets: PathBuf,
    face_up: bool,
    json: bool,
    log_json: bool,
    target: Target,
}

#[derive(Serialize)]
struct CardView<'a> {
    name: String,
    color: &'static str,
    face_up: bool,
    elements: Vec<ElementView<'a>>,
}

#[derive(Serialize)]
struct ElementView<'a> {
    visible: bool,
    #[serde(flatten)]
    element: &'a VisualElement,
}

impl<'a> CardView<'a> {
    fn new(card: &'a Card) -> Self {
        Self {
            name: card.name(),
            color: card.color().name(),
            face_up: card.face_up(),
            elements: card
                .elements()
                .iter()
                .map(|element| ElementView {
                    visible: card.is_visible(element),
                    element,
                })
                .collect(),
        }
    }
}

fn parse_cli_options(args: &[String], env_assets: Option<String>) -> anyhow::Result<CliOptions> {
    let mut assets = env_assets.map(PathBuf::from);
    let mut face_up = true;
    let mut json = false;
    let mut log_json = false;
    let mut deck = false;
    let mut cards = Vec::new();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--assets" | "-a" => {
                let Some(value) = args.get(idx + 1) else {
                    bail!("--assets needs a directory");
                };
                assets = Some(PathBuf::from(value));
                idx += 1;
            }
            "--face-down" => face_up = false,
            "--json" => json = true,
            "--log-json" => log_json = true,
            "--deck" => deck = true,
            flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
            card => cards.push(card.to_string()),
        }
        idx += 1;
    }
    let target = match (deck, cards.is_empty()) {
        (true, true) => Target::Deck,
        (false, false) => Target::Cards(cards),
        (true, false) => bail!("--deck cannot be combined with card names"),
        (false, true) => bail!("{USAGE}"),
    };
    Ok(CliOptions {
        assets: assets.unwrap_or_else(|| PathBuf::from("assets")),
        face_up,
        json,
        log_json,
        target,
    })
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn format_element(element: &VisualElement, visible: bool) -> String {
    let mut line = format!(
        "  {:<14} {:<14} ({:>6.2}, {:>6.2}) rot={:>3} scale={:.2} order={} key={}",
        format!("{:?}", element.role),
        element.label,
        element.position.x,
        element.position.y,
        element.rotation.degrees(),
        element.scale,
        element.draw_order,
        element.sprite_key,
    );
    if let Some(tint) = element.tint {
        line.push_str(&format!(" tint={}", tint.name()));
    }
    if !visible {
        line.push_str(" hidden");
    }
    line
}

fn write_text(out: &mut impl Write, cards: &[Card]) -> io::Result<()> {
    for card in cards {
        let side = if card.face_up() { "face up" } else { "face down" };
        writeln!(out, "{} {} {}", card.name(), card.color().name(), side)?;
        for element in card.elements() {
            writeln!(out, "{}", format_element(element, card.is_visible(element)))?;
        }
    }
    Ok(())
}

fn compose_cards(options: &CliOptions, sprites: &SpriteCatalog) -> anyhow::Result<Vec<Card>> {
    let composer = CardComposer::new(sprites).face_up(options.face_up);
    match &options.target {
        Target::Deck => Ok(compose_deck(&composer, &GlobalTable)?),
        Target::Cards(names) => names
            .iter()
            .map(|name| {
                let (suit, rank) = parse_card_name(name)?;
                composer
                    .compose(suit, rank, &GlobalTable)
                    .with_context(|| format!("compose {name}"))
            })
            .collect(),
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let assets = load_assets(&options.assets)
        .with_context(|| format!("load assets from {}", options.assets.display()))?;
    if cardface_core::install(assets.table).is_err() {
        bail!("card definition table already installed");
    }
    let cards = compose_cards(options, &assets.sprites)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if options.json {
        let views: Vec<CardView<'_>> = cards.iter().map(CardView::new).collect();
        serde_json::to_writer_pretty(&mut out, &views)?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &cards)?;
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return;
    }
    let options = match parse_cli_options(&args, std::env::var(ASSETS_ENV).ok()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    init_logging(options.log_json);
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
