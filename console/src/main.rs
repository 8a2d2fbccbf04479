use std::io::{self, Write};

use stockroom::api::HttpProductsApi;
use stockroom::models::{Product, ProductInput};
use stockroom::session::{ConfirmationGate, Session, SessionCommand};
use stockroom::view::{EditSignal, EditState, ListView, SortField, StockStatus, StockTotals};

const HELP: &str = "\
commands:
  list                 show the current page
  sort name|code|count sort by a column (again to flip direction)
  page <n> | next | prev
  per <n>              items per page
  add                  create a product (form)
  edit <row>           edit a row (form, empty keeps the value, '.' cancels)
  count <row> <n>      set the stock count of a row
  delete <row>         delete a row (asks for confirmation)
  status               stock totals
  dismiss              clear the error banner
  quit";

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let base_url = std::env::var("STOCKROOM_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8080".to_owned());

    let mut session = Session::new(HttpProductsApi::new(base_url));
    let mut view = ListView::new();
    let mut edits = EditState::new();
    let mut gate = ConfirmationGate::new();

    session.dispatch(SessionCommand::Reload).await;
    render(&session, &view);

    loop {
        let line = ask("> ")?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("help") => println!("{}", HELP),
            Some("list") => render(&session, &view),
            Some("sort") => {
                match words.next() {
                    Some("name") => view.sort_on(SortField::Name),
                    Some("code") => view.sort_on(SortField::Code),
                    Some("count") => view.sort_on(SortField::Count),
                    _ => {
                        println!("sort what? name, code or count");
                        continue;
                    }
                }
                render(&session, &view);
            }
            Some("page") => {
                let len = session.products().len();
                match words.next().and_then(|n| n.parse().ok()) {
                    Some(page) => view.go_to_page(page, len),
                    None => println!("page <number>"),
                }
                render(&session, &view);
            }
            Some("next") => {
                view.next_page(session.products().len());
                render(&session, &view);
            }
            Some("prev") => {
                view.previous_page(session.products().len());
                render(&session, &view);
            }
            Some("per") => {
                match words.next().and_then(|n| n.parse().ok()) {
                    Some(per) => view.set_items_per_page(per),
                    None => println!("per <number>"),
                }
                render(&session, &view);
            }
            Some("add") => {
                if let Some(input) = add_form()? {
                    session.dispatch(SessionCommand::AddRequested(input)).await;
                    render(&session, &view);
                }
            }
            Some("edit") => {
                let Some(product) = pick_row(&session, &view, words.next()) else {
                    continue;
                };
                edits.edit_row(&product.id);

                match edit_form(&product)? {
                    Some(input) => {
                        let id = edits.close_row().unwrap_or_else(|| product.id.clone());
                        session.dispatch(SessionCommand::EditConfirmed { id, input }).await;
                        render(&session, &view);
                    }
                    None => {
                        edits.close_row();
                        println!("cancelled");
                    }
                }
            }
            Some("count") => {
                let Some(product) = pick_row(&session, &view, words.next()) else {
                    continue;
                };
                let Some(value) = words.next() else {
                    println!("count <row> <number>");
                    continue;
                };

                edits.edit_count(&product.id, product.count);
                if let Some(draft) = edits.count_draft_mut() {
                    *draft = value.to_owned();
                }

                let Some(edit) = edits.end_count_edit(EditSignal::Confirm) else {
                    continue;
                };
                let Ok(count) = edit.draft.parse::<u32>() else {
                    println!("not a stock count: {}", edit.draft);
                    continue;
                };

                let input = ProductInput {
                    name: product.name.clone(),
                    code: product.code.clone(),
                    count,
                    description: product.description.clone(),
                };
                session
                    .dispatch(SessionCommand::EditConfirmed { id: edit.id, input })
                    .await;
                render(&session, &view);
            }
            Some("delete") => {
                let Some(product) = pick_row(&session, &view, words.next()) else {
                    continue;
                };
                gate.request(product.id.clone(), product.name.clone());

                let answer = ask(&format!("delete '{}'? [y/N] ", product.name))?;
                if answer.eq_ignore_ascii_case("y") {
                    if let Some(pending) = gate.confirm() {
                        session
                            .dispatch(SessionCommand::DeleteConfirmed { id: pending.id })
                            .await;
                    }
                    render(&session, &view);
                } else {
                    gate.cancel();
                    println!("kept");
                }
            }
            Some("status") => {
                let totals = StockTotals::of(session.products());
                println!("{} units in stock, {} product(s) low on stock", totals.units, totals.low_stock);
            }
            Some("dismiss") => {
                session.dispatch(SessionCommand::DismissError).await;
                render(&session, &view);
            }
            Some(other) => println!("unknown command '{}', try 'help'", other),
        }
    }

    Ok(())
}

fn ask(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// The creation form. Returns `None` when the user backs out with '.'.
fn add_form() -> io::Result<Option<ProductInput>> {
    let name = ask("name: ")?;
    if name == "." {
        return Ok(None);
    }

    let code = ask("code: ")?;
    if code == "." {
        return Ok(None);
    }

    let count = ask("count: ")?;
    if count == "." {
        return Ok(None);
    }

    let description = ask("description (optional): ")?;
    if description == "." {
        return Ok(None);
    }

    Ok(Some(ProductInput {
        name,
        code,
        // the coordinator re-validates; a non-number just fails the form there
        count: count.parse().unwrap_or(0),
        description: if description.is_empty() { None } else { Some(description) },
    }))
}

/// The full-row edit form, prefilled with the current values.
fn edit_form(product: &Product) -> io::Result<Option<ProductInput>> {
    let name = ask(&format!("name [{}]: ", product.name))?;
    if name == "." {
        return Ok(None);
    }

    let code = ask(&format!("code [{}]: ", product.code))?;
    if code == "." {
        return Ok(None);
    }

    let count = ask(&format!("count [{}]: ", product.count))?;
    if count == "." {
        return Ok(None);
    }

    let description = ask(&format!(
        "description [{}]: ",
        product.description.as_deref().unwrap_or("-")
    ))?;
    if description == "." {
        return Ok(None);
    }

    let description = if description.is_empty() {
        product.description.clone()
    } else {
        Some(description)
    };

    Ok(Some(ProductInput {
        name: if name.is_empty() { product.name.clone() } else { name },
        code: if code.is_empty() { product.code.clone() } else { code },
        count: if count.is_empty() {
            product.count
        } else {
            count.parse().unwrap_or(product.count)
        },
        description,
    }))
}

fn pick_row(
    session: &Session<HttpProductsApi>,
    view: &ListView,
    word: Option<&str>,
) -> Option<Product> {
    let Some(row) = word.and_then(|w| w.parse::<usize>().ok()) else {
        println!("which row? use the number in the first column");
        return None;
    };

    let rows = view.visible(session.products());
    match rows.get(row.saturating_sub(1)) {
        Some(product) if row >= 1 => Some((*product).clone()),
        _ => {
            println!("no row {} on this page", row);
            None
        }
    }
}

fn render<Api: stockroom::api::ProductsApi>(session: &Session<Api>, view: &ListView) {
    let state = session.state();

    if let Some(error) = &state.error {
        println!("! {} (type 'dismiss' to clear)", error);
    }

    let products = session.products();
    if products.is_empty() {
        println!("no products yet, 'add' creates one");
        return;
    }

    let rows = view.visible(products);
    let total_pages = view.total_pages(products.len()).max(1);
    let page = view.current_page().min(total_pages);

    println!("{:>3}  {:<24} {:<10} {:>6}  {}", "#", "name", "code", "count", "status");
    for (index, product) in rows.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:<10} {:>6}  {}",
            index + 1,
            product.name,
            product.code,
            product.count,
            StockStatus::of(product.count)
        );
    }

    let totals = StockTotals::of(products);
    println!(
        "page {}/{} | {} product(s) | {} unit(s) | {} low",
        page,
        total_pages,
        products.len(),
        totals.units,
        totals.low_stock
    );
}
