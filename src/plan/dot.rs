//! Graphviz rendering of compiled plans. The output is for looking at, it can't be parsed
//! back into a plan.

use super::{Plan, Slot};
use crate::constants::{PHENOME_DOT_HEIGHT, PHENOME_DOT_WIDTH};
use core::fmt::Write;

impl Plan {
    /// Render this plan in the DOT language at the default size
    pub fn dot(&self) -> String {
        self.to_dot(PHENOME_DOT_WIDTH, PHENOME_DOT_HEIGHT)
    }

    /// Render this plan in the DOT language. Inputs are drawn green and ranked first, outputs
    /// red and ranked last; recurrent links are red.
    pub fn to_dot(&self, width: f64, height: f64) -> String {
        let mut s = String::new();
        // writing into a String can't fail
        let _ = self.write_dot(&mut s, width, height);
        s
    }

    fn write_dot(&self, w: &mut impl Write, width: f64, height: f64) -> core::fmt::Result {
        writeln!(w, "digraph G {{")?;
        writeln!(w, "  rankdir=LR;")?;
        writeln!(w, "  ratio=fill;")?;
        writeln!(w, "  size=\"{width},{height}\";")?;
        writeln!(w, "  layout=dot;")?;

        for id in &self.inputs {
            writeln!(w, "  {id} [label=\"{id}\\ninput\", color=green];")?;
        }
        for (p, step) in self.steps.iter().enumerate() {
            let color = if self.outputs.binary_search(&step.node).is_ok() {
                "red"
            } else {
                "black"
            };
            writeln!(
                w,
                "  {} [label=\"{} [{p}]\\n{}\", color={color}];",
                step.node, step.node, step.activation
            )?;
        }

        if !self.inputs.is_empty() {
            write!(w, "  {{rank=min;")?;
            for id in &self.inputs {
                write!(w, " {id};")?;
            }
            writeln!(w, "}}")?;
        }
        write!(w, "  {{rank=max;")?;
        for id in &self.outputs {
            write!(w, " {id};")?;
        }
        writeln!(w, "}}")?;

        for step in &self.steps {
            for link in &step.links {
                let Some(from) = self.node_at(link.slot.index()) else {
                    continue;
                };
                let color = match link.slot {
                    Slot::Current(_) => "black",
                    Slot::Previous(_) => "red",
                };
                writeln!(
                    w,
                    "  {from} -> {} [label=\"{:.3}\", color={color}];",
                    step.node, link.weight
                )?;
            }
        }
        writeln!(w, "}}")
    }
}
