// Scalar and string parameters
use strquery::query;

fn main() {
    let age = 30;
    let name = String::from("Luke");

    let by_age = query!("{ 'term' : { 'age' : ?0 } }", age).unwrap();
    assert_eq!(by_age, "{ 'term' : { 'age' : 30 } }");

    let by_name = query!("{ 'term' : { 'name' : '?0' } }", name).unwrap();
    assert_eq!(by_name, "{ 'term' : { 'name' : 'Luke' } }");

    let flag = query!("{ 'active' : ?0 }", true).unwrap();
    assert_eq!(flag, "{ 'active' : true }");
}
