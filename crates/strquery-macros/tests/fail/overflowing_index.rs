use strquery::query;

fn main() {
    let _ = query!("?99999999999999999999999", 1);
}
