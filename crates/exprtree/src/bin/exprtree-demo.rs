//! Walks through building and evaluating expression trees.

use anyhow::{ensure, Context as _};
use clap::Parser;

use exprtree::{format_number, Environment, EvalContext, Expr};

#[derive(Debug, Parser)]
#[command(name = "exprtree-demo", version, about = "Demonstrate expression tree evaluation")]
struct Cli {
    /// Seed a binding before the demo runs (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bindings: Vec<(String, f64)>,

    /// Trace every evaluated node to stderr
    #[arg(long)]
    trace: bool,

    /// Maximum expression depth
    #[arg(long, default_value_t = EvalContext::default().max_depth)]
    max_depth: usize,
}

fn parse_binding(arg: &str) -> anyhow::Result<(String, f64)> {
    let (name, value) = arg
        .split_once('=')
        .with_context(|| format!("expected NAME=VALUE, got `{}`", arg))?;
    let name = name.trim();
    ensure!(!name.is_empty(), "binding name must not be empty");
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid value for `{}`", name))?;
    Ok((name.to_string(), value))
}

struct Demo {
    env: Environment,
    ctx: EvalContext,
}

impl Demo {
    fn show(&self, description: &str, expr: &Expr) {
        println!("\n{}:", description);
        println!("Expression: {}", expr);
        match expr.evaluate_with(&self.env, &self.ctx) {
            Ok(value) => println!("Result: {}", format_number(value)),
            Err(err) => println!("Error: {}", err),
        }
    }

    fn set(&mut self, name: &str, value: f64) {
        self.env.set(name, value);
        println!("  {} = {}", name, format_number(value));
    }
}

fn section(title: &str) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("{:-^60}", format!(" {} ", title));
    println!("{}", rule);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ensure!(cli.max_depth > 0, "--max-depth must be at least 1");

    let mut demo = Demo {
        env: cli.bindings.into_iter().collect(),
        ctx: EvalContext::with_max_depth(cli.max_depth).with_trace(cli.trace),
    };

    section("EXPRESSION TREE DEMONSTRATION");
    if !demo.env.is_empty() {
        println!("Seeded bindings:");
        for (name, value) in demo.env.iter() {
            println!("  {} = {}", name, format_number(value));
        }
    }

    section("1. CONSTANTS");
    demo.show("Integer constant", &Expr::constant(5));
    demo.show("Floating-point constant", &Expr::constant(3.14));

    section("2. VARIABLES");
    println!("Setting bindings:");
    demo.set("x", 10.0);
    demo.set("y", 5.5);
    demo.show("Defined variable 'x'", &Expr::variable("x"));
    demo.show("Undefined variable 'z'", &Expr::variable("z"));
    println!("\nUpdating 'x':");
    demo.set("x", 20.0);
    demo.show("Updated variable 'x'", &Expr::variable("x"));

    section("3. ADDITION");
    demo.show("Constants: 2 + 3", &Expr::addition(2, 3));
    demo.show("Variables: x + y", &Expr::addition("x", "y"));
    demo.show("Mixed: 7 + x", &Expr::addition(7, "x"));
    demo.show(
        "Chained: (1 + 2) + 3",
        &Expr::addition(Expr::addition(1, 2), 3),
    );

    section("4. MULTIPLICATION");
    demo.show("Constants: 4 * 5", &Expr::multiplication(4, 5));
    demo.show("Variables: x * y", &Expr::multiplication("x", "y"));
    demo.show("Mixed: 3 * x", &Expr::multiplication(3, "x"));
    demo.show(
        "Chained: (2 * 3) * 4",
        &Expr::multiplication(Expr::multiplication(2, 3), 4),
    );

    section("5. COMPLEX EXPRESSIONS");
    demo.show(
        "Precedence: 2 + x * 3",
        &Expr::addition(2, Expr::multiplication("x", 3)),
    );
    demo.show(
        "Nested: (5 + y) * (x + 2)",
        &Expr::multiplication(Expr::addition(5, "y"), Expr::addition("x", 2)),
    );
    demo.show(
        "Multiple: x * y + 2 * 3",
        &Expr::addition(Expr::multiplication("x", "y"), Expr::multiplication(2, 3)),
    );

    let missing = Expr::multiplication("w", Expr::addition("x", "v"));
    let unbound: Vec<&str> = missing.unbound_variables(&demo.env).into_iter().collect();
    demo.show("Unbound operands: w * (x + v)", &missing);
    println!("Unbound: {}", unbound.join(", "));

    println!("\nDemonstration complete!");
    Ok(())
}
