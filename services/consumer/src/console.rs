//! Interactive console menu.
//!
//! Lists the catalog, lets the user pick an item by number to see its
//! details, and exits on any other input.

use std::io::{BufRead, Write};

use tracing::warn;

use catalog::Product;

use crate::client::ProductClient;
use crate::error::ClientError;

/// Run the menu loop over the given input and output.
///
/// # Errors
///
/// Returns [`ClientError`] when listing the catalog or reading input
/// fails. A failed detail lookup is printed and the loop continues.
pub async fn run(
    client: &ProductClient,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<(), ClientError> {
    loop {
        let products = client.get_all_products().await?;
        print_menu(&products, output)?;

        let Some(choice) = read_choice(input, output, products.len())? else {
            writeln!(output, "Exiting...")?;
            return Ok(());
        };

        print_details(client, &products[choice - 1].id, output).await?;
    }
}

fn print_menu(products: &[Product], output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output, "\n\nProducts\n--------")?;
    for (index, product) in products.iter().enumerate() {
        writeln!(output, "{}) {}", index + 1, product.name)?;
    }
    Ok(())
}

/// 1-based selection; anything non-numeric or out of range means exit.
fn read_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
    count: usize,
) -> Result<Option<usize>, ClientError> {
    write!(output, "Select item to view details: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=count).contains(choice)))
}

async fn print_details(
    client: &ProductClient,
    id: &str,
    output: &mut impl Write,
) -> Result<(), ClientError> {
    match client.get_product(id).await {
        Ok(product) => {
            writeln!(output, "Product Details\n---------------")?;
            writeln!(
                output,
                "{} ({}, {}, {})",
                product.name, product.id, product.product_type, product.version
            )?;
        }
        Err(err) => {
            warn!("lookup of product {id} failed: {err}");
            writeln!(output, "Failed to load product {id}")?;
            writeln!(output, "{err}")?;
        }
    }
    Ok(())
}
