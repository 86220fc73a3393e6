use std::path::PathBuf;

use anyhow::Result;
use brace_core::input::PointerEvent;
use brace_pages::{HybridPage, ModalKind, ModalPage, PageEffect};
use brace_platform::{LandingConfig, Shell, init_logging};
use brace_sizing::{Field, SizeResult};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    Hybrid,
    Modal,
}

/// Drives a landing page headlessly: sizes a brace and prints the cart link.
#[derive(Debug, Parser)]
#[command(name = "landing", version)]
struct Cli {
    /// TOML config; defaults apply when absent.
    #[arg(long, default_value = "landing.toml")]
    config: PathBuf,

    /// Measurement A, inches.
    #[arg(long)]
    a: Option<String>,

    /// Measurement B, inches.
    #[arg(long)]
    b: Option<String>,

    #[arg(long, value_enum, default_value_t = Layout::Hybrid)]
    layout: Layout,

    /// Swipe the reviews carousel left this many times.
    #[arg(long, default_value_t = 1)]
    swipes: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LandingConfig::load(&cli.config)?;
    init_logging(&config.log_filter);
    let mut shell = Shell::native(config)?;
    let ctx = shell.context();

    let effect = match cli.layout {
        Layout::Hybrid => {
            let mut page = HybridPage::new(&ctx)?;
            report_restored(&shell);
            apply(page.order.panel().resolver(), &cli);
            swipe_reviews(&mut page.reviews, cli.swipes);
            print!("{}", page.order.panel().view());
            let effect = page.add_to_cart();
            page.teardown();
            effect
        }
        Layout::Modal => {
            let mut page = ModalPage::new(&ctx)?;
            report_restored(&shell);
            shell.perform(page.open(ModalKind::Order)?)?;
            apply(page.order.resolver(), &cli);
            swipe_reviews(&mut page.reviews, cli.swipes);
            print!("{}", page.order.view());
            let effect = page.add_to_cart();
            page.teardown();
            effect
        }
    };

    if let PageEffect::Redirect(order) = &effect {
        println!("{} -> {}", order.selection, order.url);
    }
    shell.perform(effect)
}

fn report_restored(shell: &Shell) {
    let resolver = shell.resolver.borrow();
    let (a, b) = (resolver.raw(Field::A), resolver.raw(Field::B));
    if !a.is_empty() && !b.is_empty() {
        println!("restored A={a} B={b}");
    }
}

fn apply(resolver: &brace_pages::SharedResolver, cli: &Cli) {
    let mut resolver = resolver.borrow_mut();
    for (field, raw) in [(Field::A, &cli.a), (Field::B, &cli.b)] {
        if let Some(raw) = raw {
            let result = resolver.update(field, raw);
            log::debug!("{} = {raw:?} -> {result:?}", field.label());
        }
    }
    if resolver.result() == SizeResult::OutOfRange {
        println!("Call us at {} for a custom fit.", brace_sizing::HELP_PHONE);
    }
}

fn swipe_reviews<T: 'static>(reviews: &mut brace_pages::CarouselSection<T>, swipes: usize) {
    reviews.resize(400.0);
    for _ in 0..swipes {
        reviews.pointer(&PointerEvent::touch_down(1, 300.0, 100.0));
        reviews.pointer(&PointerEvent::touch_move(1, 200.0, 104.0));
        let outcome = reviews.pointer(&PointerEvent::touch_up(1, 200.0, 104.0));
        log::debug!("reviews swipe: {outcome:?}");
    }
    print!("{}", reviews.view());
}
