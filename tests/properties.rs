//! # Property tests
//!
//! Random small problems `max c x s.t. A x <= b, x >= 0` with `b >= 0`, such that the slack
//! variables form a feasible initial basis. Every intermediate tableau is checked.
use num_traits::Zero;
use proptest::prelude::*;
use relp_num::RB;
use relp_num::RationalBig;

use relp_tableau::algorithm::primal::{next_pivot, PivotDecision};
use relp_tableau::algorithm::strategy::pivot_rule::{Bland, MostNegative, PivotRule};
use relp_tableau::algorithm::tableau::Tableau;

type S = RationalBig;

/// Far more than the number of bases of the generated problems.
const MAX_PIVOTS: usize = 200;

#[derive(Clone, Debug)]
struct Problem {
    cost: Vec<i32>,
    constraints: Vec<Vec<i32>>,
    b: Vec<i32>,
}

fn problem() -> impl Strategy<Value = Problem> {
    (1_usize..=4, 1_usize..=4)
        .prop_flat_map(|(nr_variables, nr_constraints)| (
            prop::collection::vec(-5_i32..=5, nr_variables),
            prop::collection::vec(prop::collection::vec(-5_i32..=5, nr_variables), nr_constraints),
            prop::collection::vec(0_i32..=10, nr_constraints),
        ))
        .prop_map(|(cost, constraints, b)| Problem { cost, constraints, b })
}

fn convert(values: &[i32]) -> Vec<S> {
    values.iter().map(|&value| RB!(value)).collect()
}

impl Problem {
    fn tableau(&self) -> Tableau<S> {
        Tableau::from_inequalities(
            convert(&self.cost),
            self.constraints.iter().map(|row| convert(row)).collect(),
            convert(&self.b),
        ).unwrap()
    }

    /// The values of the problem variables and slacks satisfy the constraints exactly, and the
    /// objective value matches.
    fn check_solution(&self, solution: &[S], objective_value: &S) -> Result<(), TestCaseError> {
        let nr_variables = self.cost.len();
        prop_assert_eq!(solution.len(), nr_variables + self.constraints.len());
        prop_assert!(solution.iter().all(|value| value >= &S::zero()));

        for (i, (row, &b_i)) in self.constraints.iter().zip(&self.b).enumerate() {
            let lhs = row.iter()
                .zip(solution)
                .fold(solution[nr_variables + i].clone(), |total, (&a_ij, x_j)| total + RB!(a_ij) * x_j);
            prop_assert_eq!(lhs, RB!(b_i));
        }

        let value = self.cost.iter()
            .zip(solution)
            .fold(S::zero(), |total, (&c_j, x_j)| total + RB!(c_j) * x_j);
        prop_assert_eq!(&value, objective_value);

        Ok(())
    }
}

#[derive(PartialEq, Debug)]
enum Outcome {
    Optimal(S),
    Unbounded,
    Undecided,
}

/// Pivot until a conclusion, checking the invariants after each basis change.
fn run<PR: PivotRule>(problem: &Problem) -> Result<Outcome, TestCaseError> {
    let mut tableau = problem.tableau();
    let mut rule = PR::new();

    for _ in 0..MAX_PIVOTS {
        match next_pivot(&tableau, &mut rule) {
            PivotDecision::Pivot { column, row } => {
                let before = tableau.objective_function_value().clone();
                let degenerate = tableau.constraint_value(row).is_zero();
                tableau.bring_into_basis(column, row);

                prop_assert!(tableau.is_in_basic_feasible_solution_state());
                if degenerate {
                    prop_assert_eq!(tableau.objective_function_value(), &before);
                } else {
                    prop_assert!(tableau.objective_function_value() > &before);
                }
                problem.check_solution(&tableau.extract_solution(), tableau.objective_function_value())?;
            },
            PivotDecision::Optimal => {
                prop_assert!(tableau.relative_costs().iter().all(|cost| cost >= &S::zero()));
                return Ok(Outcome::Optimal(tableau.objective_function_value().clone()));
            },
            PivotDecision::Unbounded { column } => {
                prop_assert!(tableau.relative_cost(column) < &S::zero());
                prop_assert!((0..tableau.nr_rows()).all(|i| tableau.coefficient(i, column) <= &S::zero()));
                return Ok(Outcome::Unbounded);
            },
        }
    }

    Ok(Outcome::Undecided)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bland_terminates(problem in problem()) {
        let outcome = run::<Bland>(&problem)?;
        prop_assert_ne!(outcome, Outcome::Undecided);
    }

    #[test]
    fn most_negative_agrees_with_bland(problem in problem()) {
        let bland = run::<Bland>(&problem)?;
        match run::<MostNegative>(&problem)? {
            // This rule may cycle on degenerate problems
            Outcome::Undecided => {},
            outcome => prop_assert_eq!(outcome, bland),
        }
    }

    #[test]
    fn nonpositive_cost_needs_no_pivots(problem in problem()) {
        let mut problem = problem;
        for cost in &mut problem.cost {
            *cost = -cost.abs();
        }

        let tableau = problem.tableau();
        prop_assert_eq!(next_pivot(&tableau, &mut MostNegative::new()), PivotDecision::Optimal);
        prop_assert_eq!(tableau.extract_solution()[problem.cost.len()..].to_vec(), convert(&problem.b));
    }
}
