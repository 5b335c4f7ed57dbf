use typed_box::{BoxError, SharedBox};
use std::thread;

// A slot shared between a producer and consumers, each only knowing the
// type it expects to find there.

#[derive(Debug, Clone)]
struct Job {
    id: u32,
    description: String,
}

fn main() -> Result<(), BoxError> {
    let shared = SharedBox::new();

    // Producer fills the slot from another thread
    let producer = shared.clone();
    thread::spawn(move || {
        producer
            .store(Job {
                id: 7,
                description: "rebuild index".to_string(),
            })
            .unwrap();
    })
    .join()
    .unwrap();

    // Consumer reads it without cloning
    shared.with(|job: &Job| {
        println!("Job #{}: {}", job.id, job.description);
    })?;

    // A consumer expecting the wrong type gets a descriptive failure
    match shared.get::<String>() {
        Ok(s) => println!("This shouldn't happen: {}", s),
        Err(e) => eprintln!("{}", e),
    }

    // Take ownership of the job, leaving the slot empty for reuse
    let job = shared.take::<Job>()?;
    println!("Took job #{}", job.id);
    println!("Slot occupied: {}", shared.has_value()?);

    Ok(())
}
