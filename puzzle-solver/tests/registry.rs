//! Tests for explicit solver registration and lookup

use puzzle_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("lines".into()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|l| l.len())
            .map(|l| l.to_string())
            .ok_or_else(|| SolveError::failed("no lines"))
    }
}

#[test]
fn test_register_and_solve() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2024, 3, &["text"])
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2024, 3, "a\nbbb\ncc").unwrap();
    assert_eq!(solver.year(), 2024);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "bbb");
    assert!(solver.parse_time() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(1).unwrap().part, 1);
}

#[test]
fn test_out_of_range_part_through_dyn_solver() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2024, 3, &[])
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2024, 3, "x").unwrap();
    assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<Lines>(2024, 3, &[])
        .unwrap()
        .register::<Lines>(2024, 3, &[]);

    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2024, 3))));
}

#[test]
fn test_invalid_year_day_rejected() {
    for (year, day) in [(2014, 1), (2035, 1), (2024, 0), (2024, 26)] {
        let result = SolverRegistryBuilder::new().register::<Lines>(year, day, &[]);
        assert!(
            matches!(result, Err(RegistrationError::InvalidYearDay(y, d)) if y == year && d == day),
            "{year}/{day} should be rejected"
        );
    }
}

#[test]
fn test_lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2024, 3, &[])
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2024, 4, "x"),
        Err(SolverError::NotFound(2024, 4))
    ));
    assert!(matches!(
        registry.create_solver(1999, 4, "x"),
        Err(SolverError::InvalidYearDay(1999, 4))
    ));
    assert!(matches!(
        registry.create_solver(2024, 3, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_iteration_is_ordered_and_carries_metadata() {
    let registry = SolverRegistryBuilder::new()
        .register::<Lines>(2025, 1, &["b"])
        .unwrap()
        .register::<Lines>(2024, 12, &["a", "b"])
        .unwrap()
        .register::<Lines>(2024, 1, &[])
        .unwrap()
        .build();

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert!(registry.contains(2024, 12));
    assert!(!registry.contains(2024, 2));

    let order: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(order, vec![(2024, 1), (2024, 12), (2025, 1)]);

    let tagged: Vec<(u16, u8)> = registry
        .iter_info()
        .filter(|i| i.has_all_tags(&["b"]))
        .map(|i| (i.year, i.day))
        .collect();
    assert_eq!(tagged, vec![(2024, 12), (2025, 1)]);

    let info = registry.get_info(2024, 12).unwrap();
    assert_eq!(info.parts, 2);
    assert_eq!(info.tags, &["a", "b"]);
}

#[test]
fn test_register_factory_with_custom_closure() {
    let registry = SolverRegistryBuilder::new()
        .register_factory(2016, 7, 1, &["custom"], |input: &str| {
            let instance = puzzle_solver::SolverInstance::<Lines>::new(2016, 7, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
        .unwrap()
        .build();

    assert_eq!(registry.get_info(2016, 7).unwrap().parts, 1);
    let mut solver = registry.create_solver(2016, 7, "q\nw").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "2");
}

#[test]
fn test_empty_registry() {
    let registry = SolverRegistryBuilder::default().build();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.iter_info().count(), 0);
}
