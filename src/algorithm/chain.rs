//! Peso de cadena: cuántas asignaturas distintas quedan desbloqueadas
//! (transitivamente) al aprobar una dada.

use std::collections::HashSet;
use crate::algorithm::graph::DependencyMap;

/// Cuenta los dependientes transitivos distintos de `code`.
///
/// Cada llamada usa su propio conjunto de visitados, de modo que un ciclo en
/// una malla mal formada corta el recorrido (subestimando el peso) en vez de
/// recursar sin fin. El propio `code` nunca se cuenta.
pub fn chain_weight(deps: &DependencyMap, code: &str) -> usize {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(code);
    let mut stack: Vec<&str> = vec![code];
    let mut count = 0usize;

    while let Some(current) = stack.pop() {
        for dep in deps.dependents_of(current) {
            if visited.insert(dep.as_str()) {
                count += 1;
                stack.push(dep.as_str());
            }
        }
    }

    count
}
