use molbench::core::models::atom::PlacedAtom;
use molbench::core::models::bond::BondOrder;
use molbench::workspace::identify::Identification;
use molbench::workspace::view::WorkspaceView;
use nalgebra::Point2;
use std::fmt::Write;

/// Text rendering of a workspace, one line per hook invocation.
///
/// Collects into a buffer rather than printing directly so the final
/// output is emitted in one piece (and so tests can assert on it).
#[derive(Debug, Default)]
pub struct TerminalView {
    buffer: String,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

// Writes into a String are infallible; the results are discarded.
impl WorkspaceView for TerminalView {
    fn draw_atom(&mut self, atom: &PlacedAtom) {
        let _ = writeln!(
            self.buffer,
            "  atom {} {} at ({:.1}, {:.1}) [{}] open slots: {}",
            atom.id,
            atom.symbol(),
            atom.position.x,
            atom.position.y,
            atom.element.kind.tag(),
            atom.open_slots,
        );
    }

    fn draw_bond(&mut self, from: Point2<f64>, to: Point2<f64>, order: BondOrder) {
        let _ = writeln!(
            self.buffer,
            "  bond ({:.1}, {:.1}) - ({:.1}, {:.1}) [{}]",
            from.x, from.y, to.x, to.y, order,
        );
    }

    fn show_molecule(&mut self, result: &Identification) {
        let _ = match result.formula() {
            Some(formula) => {
                writeln!(self.buffer, "\n{} ({})", result.display_name(), formula)
            }
            None => writeln!(self.buffer, "\n{}", result.display_name()),
        };
    }

    fn show_info(&mut self, result: &Identification) {
        let _ = writeln!(self.buffer, "{}", result.description());
    }
}
