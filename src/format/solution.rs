use crate::solver::SolutionResult;

/// Render a `SolutionResult` into human-readable lines: the problem kind,
/// one numbered line per step, then the answer.
pub fn pretty_solution(result: &SolutionResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.steps.len() + 2);
    lines.push(format!("Problem: {}", result.kind));
    lines.extend(
        result
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}: {}", i + 1, step.title, step.description)),
    );
    lines.push(format!("Answer: {}", result.final_answer));
    lines
}
