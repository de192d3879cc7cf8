use crate::cli::BenchArgs;
use crate::error::{CliError, Result};
use crate::ui::TerminalView;
use molbench::core::catalog::ElementCatalog;
use molbench::core::compounds::CompoundRegistry;
use molbench::workspace::Workspace;
use molbench::workspace::session::SavedSession;
use nalgebra::Point2;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// One scripted placement: which element, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    atomic_number: u32,
    position: Point2<f64>,
}

impl FromStr for Placement {
    type Err = String;

    /// Parses `Z@X,Y`, e.g. `8@120,80`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || format!("invalid placement '{s}', expected Z@X,Y (e.g. 8@120,80)");
        let (number, coords) = s.split_once('@').ok_or_else(err)?;
        let (x, y) = coords.split_once(',').ok_or_else(err)?;
        Ok(Placement {
            atomic_number: number.trim().parse().map_err(|_| err())?,
            position: Point2::new(
                x.trim().parse().map_err(|_| err())?,
                y.trim().parse().map_err(|_| err())?,
            ),
        })
    }
}

pub fn run(args: BenchArgs) -> Result<()> {
    let catalog = ElementCatalog::load(&args.catalog)?;
    let compounds = CompoundRegistry::load(&args.compounds)?;
    info!(
        "Loaded {} elements and {} known compounds.",
        catalog.len(),
        compounds.len()
    );

    let mut workspace = Workspace::new(compounds);

    if let Some(path) = &args.load {
        match SavedSession::load(path)? {
            Some(session) => {
                workspace.restore(&session, &catalog);
                info!(
                    "Restored {} atoms and {} bonds from '{}'.",
                    workspace.atoms().len(),
                    workspace.bonds().len(),
                    path.display()
                );
            }
            None => println!("No saved session at '{}'; starting empty.", path.display()),
        }
    }

    for raw in &args.place {
        let placement: Placement = raw.parse().map_err(CliError::Argument)?;
        place_and_bond(&mut workspace, &catalog, placement)?;
    }

    let mut view = TerminalView::new();
    workspace.render_to(&mut view);
    print!("{}", view.into_output());

    if let Some(path) = &args.save {
        workspace.snapshot().save(path)?;
        println!("\nSession saved to '{}'.", path.display());
    }

    Ok(())
}

/// Drops one element and runs the drag-release protocol for it: place,
/// pick up, release at the same spot so proximity bonding gets exactly one
/// chance, as it would at the end of a real drag.
fn place_and_bond(
    workspace: &mut Workspace,
    catalog: &ElementCatalog,
    placement: Placement,
) -> Result<()> {
    let Some(id) = workspace.drop_payload(catalog, placement.atomic_number, placement.position)
    else {
        warn!(
            "Atomic number {} is not in the catalog; placement ignored.",
            placement.atomic_number
        );
        return Ok(());
    };
    debug!("Placed atom {} at {:?}.", id, placement.position);

    workspace.begin_drag(id)?;
    if let Some(event) = workspace.release_drag() {
        info!("Bond formed: {} - {} [{}].", event.a, event.b, event.order);
    }
    Ok(())
}
