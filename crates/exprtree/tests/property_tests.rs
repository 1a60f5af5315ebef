//! Property-based tests for evaluation and rendering.

use proptest::prelude::*;

use exprtree::*;

// Strategy for finite values of moderate magnitude
fn value() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6f64
}

// Strategy for leaf values small enough that deep products stay finite
fn small() -> impl Strategy<Value = f64> {
    -100.0f64..100.0f64
}

// Strategy for variable names
fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

// Strategy for arbitrary trees over constants and the variables a, b, c
fn expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        small().prop_map(|v| Expr::constant(v)),
        prop_oneof![Just("a"), Just("b"), Just("c")].prop_map(|n| Expr::variable(n)),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::addition(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::multiplication(l, r)),
        ]
    })
}

fn abc(a: f64, b: f64, c: f64) -> Environment {
    [("a", a), ("b", b), ("c", c)].into_iter().collect()
}

fn close(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= scale * 1e-9
}

proptest! {
    #[test]
    fn constant_evaluates_to_itself(v in value(), other in value()) {
        let empty = Environment::new();
        let populated = abc(other, other, other);
        prop_assert_eq!(Expr::constant(v).evaluate(&empty), Ok(v));
        prop_assert_eq!(Expr::constant(v).evaluate(&populated), Ok(v));
    }

    #[test]
    fn unset_variable_fails_until_set(n in name(), v in value()) {
        let mut env = Environment::new();
        let var = Expr::variable(n.clone());
        prop_assert_eq!(var.evaluate(&env), Err(EvalError::undefined_variable(n.clone())));

        env.set(n, v);
        prop_assert_eq!(var.evaluate(&env), Ok(v));
    }

    #[test]
    fn last_set_wins(n in name(), v1 in value(), v2 in value()) {
        let mut env = Environment::new();
        env.set(n.clone(), v1);
        env.set(n.clone(), v2);
        prop_assert_eq!(Expr::variable(n).evaluate(&env), Ok(v2));
    }

    #[test]
    fn addition_and_multiplication_commute(
        l in expr(), r in expr(), a in small(), b in small(), c in small()
    ) {
        let env = abc(a, b, c);
        prop_assert_eq!(
            Expr::addition(l.clone(), r.clone()).evaluate(&env),
            Expr::addition(r.clone(), l.clone()).evaluate(&env)
        );
        prop_assert_eq!(
            Expr::multiplication(l.clone(), r.clone()).evaluate(&env),
            Expr::multiplication(r, l).evaluate(&env)
        );
    }

    #[test]
    fn addition_associates_up_to_rounding(x in value(), y in value(), z in value()) {
        let env = abc(x, y, z);
        let left = Expr::addition(Expr::addition("a", "b"), "c").evaluate(&env).unwrap();
        let right = Expr::addition("a", Expr::addition("b", "c")).evaluate(&env).unwrap();
        prop_assert!(close(left, right), "{} vs {}", left, right);
    }

    #[test]
    fn multiplication_associates_up_to_rounding(x in value(), y in value(), z in value()) {
        let env = abc(x, y, z);
        let left = Expr::multiplication(Expr::multiplication("a", "b"), "c")
            .evaluate(&env)
            .unwrap();
        let right = Expr::multiplication("a", Expr::multiplication("b", "c"))
            .evaluate(&env)
            .unwrap();
        prop_assert!(close(left, right), "{} vs {}", left, right);
    }

    #[test]
    fn integral_constants_render_as_integers(n in -1_000_000i32..1_000_000i32) {
        prop_assert_eq!(Expr::constant(n).render(), n.to_string());
        prop_assert_eq!(Expr::constant(f64::from(n)).render(), n.to_string());
    }

    #[test]
    fn fractional_constants_render_with_fraction(n in -1000i32..1000i32) {
        let v = f64::from(n) + 0.5;
        let rendered = Expr::constant(v).render();
        prop_assert!(rendered.ends_with(".5"), "{}", rendered);
        prop_assert_eq!(rendered.parse::<f64>().unwrap(), v);
    }

    #[test]
    fn evaluation_is_repeatable(e in expr(), a in small(), b in small(), c in small()) {
        let env = abc(a, b, c);
        prop_assert_eq!(e.evaluate(&env), e.evaluate(&env));
        prop_assert_eq!(e.evaluate(&env), e.evaluate_with(&env, &EvalContext::default()));
    }

    #[test]
    fn fails_exactly_when_a_variable_is_unbound(e in expr(), a in small()) {
        // Only `a` is bound
        let mut env = Environment::new();
        env.set("a", a);

        let unbound: Vec<&str> = e.unbound_variables(&env).into_iter().collect();
        match e.evaluate(&env) {
            Ok(_) => prop_assert!(unbound.is_empty()),
            Err(err) => prop_assert_eq!(err.variable_name(), unbound.first().copied()),
        }
    }

    #[test]
    fn render_parentheses_match_internal_nodes(e in expr()) {
        let rendered = e.render();
        let internal = e.node_count() - leaf_count(&e);
        prop_assert_eq!(rendered.matches('(').count(), internal);
        prop_assert_eq!(rendered.matches(')').count(), internal);
    }
}

fn leaf_count(e: &Expr) -> usize {
    match e.as_binary() {
        Some((_, l, r)) => leaf_count(l) + leaf_count(r),
        None => 1,
    }
}
