// Repeated and out-of-order placeholders; each argument evaluated once
use std::cell::Cell;

use strquery::query;

fn main() {
    let calls = Cell::new(0);
    let next = || {
        calls.set(calls.get() + 1);
        "x"
    };

    let q = query!("?1 ?0 ?1 ?0", next(), 7).unwrap();
    assert_eq!(q, "7 x 7 x");
    assert_eq!(calls.get(), 1);

    let literal = query!("no placeholders, te?t").unwrap();
    assert_eq!(literal, "no placeholders, te?t");
}
