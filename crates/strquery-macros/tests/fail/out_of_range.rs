use strquery::query;

fn main() {
    let _ = query!("{ 'age' : ?2 }", 30, 35);
}
