use std::env;

use hexrsa::{decrypt, encrypt, Result, RSA};

fn main() -> Result<()> {
    println!("Generating RSA keypair...");
    let (public_key, private_key) = RSA::new_key_pair(&mut rand::thread_rng())?;
    println!("Done!");

    println!("Public Key: {}", public_key);
    println!("Private Key: {}", private_key);

    let args: Vec<String> = env::args().skip(1).collect();
    let message = if args.is_empty() {
        String::from("Hello, RSA!")
    } else {
        args.join(" ")
    };

    let cipher_hex = encrypt(&public_key, &message);
    println!("\nEncrypted message: {}\n", cipher_hex);

    let decrypted = decrypt(&private_key, &cipher_hex)?;
    println!("Decrypted message: {}\n", decrypted);

    Ok(())
}
