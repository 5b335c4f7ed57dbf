use typed_box::{BoxError, TypedBox};

fn main() {
    let mut container = TypedBox::new();

    container.store(100i32);

    match container.get::<i32>() {
        Ok(n) => println!("Stored int: {}", n),
        Err(e) => eprintln!("Unexpected error: {}", e),
    }

    println!("Trying to get double...");
    match container.get::<f64>() {
        Ok(d) => println!("This shouldn't happen: {}", d),
        Err(e @ BoxError::TypeMismatch { .. }) => eprintln!("{}", e),
        Err(e) => eprintln!("Unexpected error: {}", e),
    }

    // The failed retrieval didn't disturb the payload
    println!("Box still holds: {:?}", container.stored_type());

    // Retrieval from an empty box names the sentinel
    container.clear();
    match container.get::<i32>() {
        Ok(n) => println!("This shouldn't happen: {}", n),
        Err(e) => eprintln!("{}", e),
    }
}
