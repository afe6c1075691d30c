use std::io::{self, Write};

use calc_ir::OpRegistry;

/// Print one line per registered operator: symbol, kind, operand count and
/// precedence.
pub fn write_ops<W: Write>(output: &mut W, registry: &OpRegistry) -> io::Result<()> {
    writeln!(output, "{:<6} {:<8} {:<5} precedence", "symbol", "kind", "arity")?;
    for op in registry.iter() {
        let kind = op.kind();
        writeln!(
            output,
            "{:<6} {:<8} {:<5} {}",
            op.symbol(),
            kind.name(),
            kind.arity(),
            op.precedence()
        )?;
    }
    Ok(())
}

pub fn list_ops() -> i32 {
    let registry = OpRegistry::builtin();
    match write_ops(&mut io::stdout().lock(), &registry) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}
