use crate::core::filter::CategoryFilter;
use crate::core::session::BrowseSession;
use crate::domain::model::ProductId;
use crate::domain::ports::ConfigProvider;
use crate::utils::clock::DisplayClock;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use crate::view;
use crate::view::boundary::FALLBACK_NOTICE;
use crate::view::{notice, supervised};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};

// Upper bound of the filter dialog's price control.
const PRICE_CEILING_MAX: f64 = 1000.0;

const HELP_TEXT: &str = "\
Commands:
  search [text]                           filter the grid by title substring
  filter [category=<name>] [price=<max>] [rating=<n,...>]
                                          apply category / price / rating filters
  filter clear                            drop all filters (search kept)
  next, prev                              page through the grid
  view <id>                               show a product's detail card
  add <id>                                put one unit in the cart
  remove <id>                             drop a cart line
  inc <id>, dec <id>                      adjust a cart line's quantity
  qty <id> <n>                            set a cart line's quantity (0 removes)
  cart                                    show the cart
  categories                              list catalogue categories
  help                                    this text
  quit                                    leave the storefront
";

/// One parsed user intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Search(String),
    Filter {
        category: CategoryFilter,
        price_ceiling: f64,
        ratings: BTreeSet<u8>,
    },
    ClearFilters,
    NextPage,
    PreviousPage,
    Preview(ProductId),
    Add(ProductId),
    Remove(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    SetQuantity(ProductId, u32),
    ShowCart,
    ListCategories,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> std::result::Result<Command, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (head, args) = tokens
            .split_first()
            .ok_or_else(|| "Empty command".to_string())?;

        match *head {
            "help" => Ok(Command::Help),
            "search" => Ok(Command::Search(args.join(" "))),
            "filter" => parse_filter_args(args),
            "next" | "n" => Ok(Command::NextPage),
            "prev" | "p" => Ok(Command::PreviousPage),
            "view" => Ok(Command::Preview(parse_id(args, "Usage: view <id>")?)),
            "add" => Ok(Command::Add(parse_id(args, "Usage: add <id>")?)),
            "remove" | "rm" => Ok(Command::Remove(parse_id(args, "Usage: remove <id>")?)),
            "inc" => Ok(Command::Increment(parse_id(args, "Usage: inc <id>")?)),
            "dec" => Ok(Command::Decrement(parse_id(args, "Usage: dec <id>")?)),
            "qty" => {
                let id = parse_id(args, "Usage: qty <id> <n>")?;
                let quantity = args
                    .get(1)
                    .and_then(|v| v.parse::<u32>().ok())
                    .ok_or_else(|| "Usage: qty <id> <n>".to_string())?;
                Ok(Command::SetQuantity(id, quantity))
            }
            "cart" => Ok(Command::ShowCart),
            "categories" => Ok(Command::ListCategories),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command: {} (try 'help')", other)),
        }
    }
}

fn parse_id(args: &[&str], usage: &str) -> std::result::Result<ProductId, String> {
    args.first()
        .and_then(|v| v.parse::<u64>().ok())
        .map(ProductId)
        .ok_or_else(|| usage.to_string())
}

fn parse_filter_args(args: &[&str]) -> std::result::Result<Command, String> {
    if args.len() == 1 && args[0] == "clear" {
        return Ok(Command::ClearFilters);
    }

    // Tokens with '=' start a key=value pair; bare tokens extend the previous
    // value, so category names with spaces parse without quoting.
    let mut pairs: Vec<(&str, String)> = Vec::new();
    for token in args {
        if let Some((key, value)) = token.split_once('=') {
            pairs.push((key, value.to_string()));
        } else if let Some(last) = pairs.last_mut() {
            last.1.push(' ');
            last.1.push_str(token);
        } else {
            return Err(format!("Unrecognized filter argument: {}", token));
        }
    }

    let mut category = CategoryFilter::All;
    let mut price_ceiling = PRICE_CEILING_MAX;
    let mut ratings = BTreeSet::new();

    for (key, value) in pairs {
        match key {
            "category" => {
                category = if value.eq_ignore_ascii_case("all") {
                    CategoryFilter::All
                } else {
                    CategoryFilter::Only(value)
                };
            }
            "price" => {
                let ceiling: f64 = value
                    .parse()
                    .map_err(|_| format!("Invalid price ceiling: {}", value))?;
                validate_range("price", ceiling, 0.0, PRICE_CEILING_MAX)
                    .map_err(|e| e.to_string())?;
                price_ceiling = ceiling;
            }
            "rating" => {
                for part in value.split(',') {
                    let bucket: u8 = part
                        .trim()
                        .parse()
                        .map_err(|_| format!("Invalid rating: {}", part))?;
                    if !(1..=5).contains(&bucket) {
                        return Err(format!("Rating must be between 1 and 5: {}", bucket));
                    }
                    ratings.insert(bucket);
                }
            }
            other => return Err(format!("Unknown filter key: {}", other)),
        }
    }

    Ok(Command::Filter {
        category,
        price_ceiling,
        ratings,
    })
}

/// Interactive event loop: read one command per line, dispatch it to the
/// session, re-render. Ends on quit or EOF.
pub fn run<C: ConfigProvider>(session: &mut BrowseSession<C>) -> Result<()> {
    let clock = DisplayClock::new();
    render_screen(session, &clock);
    println!("Type 'help' for the command list.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("storefront> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Command::parse(trimmed) {
            Ok(command) => {
                if !dispatch(session, &clock, command) {
                    break;
                }
            }
            Err(message) => notice::toast_error(&message),
        }
    }

    Ok(())
}

/// Apply one intent to the session and render the outcome. Returns false
/// when the loop should end.
fn dispatch<C: ConfigProvider>(
    session: &mut BrowseSession<C>,
    clock: &DisplayClock,
    command: Command,
) -> bool {
    match command {
        Command::Help => print!("{}", HELP_TEXT),
        Command::Search(query) => {
            session.set_search(query);
            render_screen(session, clock);
        }
        Command::Filter {
            category,
            price_ceiling,
            ratings,
        } => {
            session.apply_filters(category, price_ceiling, ratings);
            render_screen(session, clock);
        }
        Command::ClearFilters => {
            session.clear_filters();
            render_screen(session, clock);
        }
        Command::NextPage => {
            session.next_page();
            render_screen(session, clock);
        }
        Command::PreviousPage => {
            session.previous_page();
            render_screen(session, clock);
        }
        Command::Preview(id) => match session.catalogue().get(id) {
            Some(product) => print!(
                "{}",
                supervised("preview", FALLBACK_NOTICE, || view::preview::render(
                    product
                ))
            ),
            None => notice::toast_error(&format!("No product with id {}", id)),
        },
        Command::Add(id) => match session.add_to_cart(id) {
            Some(1) => notice::toast_success("Item added to cart"),
            Some(_) => notice::toast_info("Item quantity updated"),
            None => notice::toast_error(&format!("No product with id {}", id)),
        },
        Command::Remove(id) => {
            if session.cart().line(id).is_some() {
                session.remove_from_cart(id);
                notice::toast_success("Item removed from cart");
            }
        }
        Command::Increment(id) => {
            if session.cart().line(id).is_some() {
                session.increment_quantity(id);
                notice::toast_info("Item quantity updated");
            }
        }
        Command::Decrement(id) => {
            if let Some(line) = session.cart().line(id) {
                let removing = line.quantity == 1;
                session.decrement_quantity(id);
                if removing {
                    notice::toast_success("Item removed from cart");
                } else {
                    notice::toast_info("Item quantity updated");
                }
            }
        }
        Command::SetQuantity(id, quantity) => {
            if session.cart().line(id).is_some() {
                session.set_quantity(id, quantity);
                if quantity == 0 {
                    notice::toast_success("Item removed from cart");
                } else {
                    notice::toast_info("Item quantity updated");
                }
            }
        }
        Command::ShowCart => print!(
            "{}",
            supervised("cart", FALLBACK_NOTICE, || view::cart::render(
                session.cart()
            ))
        ),
        Command::ListCategories => {
            for category in session.catalogue().categories() {
                println!("{}", category);
            }
        }
        Command::Quit => return false,
    }
    true
}

fn render_screen<C: ConfigProvider>(session: &BrowseSession<C>, clock: &DisplayClock) {
    let header = supervised("header", FALLBACK_NOTICE, || {
        view::header::render(clock, session.cart())
    });
    let page = session.visible_page();
    let grid = supervised("grid", FALLBACK_NOTICE, || {
        view::grid::render(&page, session.fetch_error())
    });
    print!("{}\n{}", header, grid);
}
