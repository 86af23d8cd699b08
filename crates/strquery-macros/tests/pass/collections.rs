// Collection parameters of both element kinds
use std::collections::BTreeSet;

use strquery::query;

fn main() {
    let ages = vec![30, 35, 40];
    let names = ["hello \"Stranger\"", "Another string"];
    let tags: BTreeSet<&str> = ["b", "a"].into_iter().collect();

    assert_eq!(query!("?0", ages).unwrap(), "[30,35,40]");
    assert_eq!(
        query!("?0", names).unwrap(),
        r#"["hello \"Stranger\"","Another string"]"#
    );
    assert_eq!(query!("?0", tags).unwrap(), r#"["a","b"]"#);
    assert_eq!(query!("?0", Vec::<u8>::new()).unwrap(), "[]");
}
