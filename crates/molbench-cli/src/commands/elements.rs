use crate::cli::ElementsArgs;
use crate::error::{CliError, Result};
use molbench::core::catalog::ElementCatalog;
use molbench::core::models::element::Element;
use molbench::core::valence::bonding_slots;
use tracing::info;

pub fn run(args: ElementsArgs) -> Result<()> {
    let catalog = ElementCatalog::load(&args.catalog)?;
    info!("Loaded {} elements from catalog.", catalog.len());

    match &args.element {
        Some(query) => {
            let element = resolve(&catalog, query).ok_or_else(|| {
                CliError::Argument(format!("no element '{query}' in the catalog"))
            })?;
            print_data_sheet(element);
        }
        None => {
            for element in catalog.iter() {
                println!(
                    "{:>3}  {:<3} {:<14} [{}]",
                    element.atomic_number,
                    element.symbol,
                    element.name,
                    element.kind.tag(),
                );
            }
        }
    }
    Ok(())
}

/// Accepts either a symbol ("O") or an atomic number ("8").
fn resolve<'a>(catalog: &'a ElementCatalog, query: &str) -> Option<&'a Element> {
    if let Ok(number) = query.parse::<u32>() {
        return catalog.by_number(number);
    }
    catalog.by_symbol(query)
}

fn print_data_sheet(element: &Element) {
    println!("{} ({})", element.name, element.symbol);
    println!("  Atomic number:     {}", element.atomic_number);
    println!("  Atomic mass:       {} u", element.atomic_mass);
    println!("  Category:          {}", element.kind.tag());
    println!("  Protons:           {}", element.protons);
    println!("  Electrons:         {}", element.electrons);
    println!("  Neutrons:          {}", element.neutrons);
    match element.valence_electrons {
        Some(v) => println!("  Valence electrons: {v}"),
        None => println!("  Valence electrons: n/a"),
    }
    println!("  Bonding slots:     {}", bonding_slots(element));
}
