use std::io::{self, BufRead, Write};

use anyhow::Result;
use atlas_core::{atlas, store::TextureStore, VERSION};
use clap::Parser;

/// Interactive menu REPL; all commands are read from stdin, no flags.
#[derive(Parser, Debug)]
#[command(name = "atlasmaker", version = VERSION, about = "Tile equally-sized square images into a texture atlas PNG")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    println!("Welcome to Atlas Maker v{VERSION}\n");

    let mut store = TextureStore::new();
    loop {
        print_status(&store);
        print_menu();
        // EOF quits like 'q' so piped input terminates cleanly
        let Some(line) = read_line()? else { break };
        match line.chars().next() {
            Some('a') => add_image(&mut store)?,
            Some('g') => generate(&store)?,
            Some('l') => list_images(&store),
            Some('q') => break,
            _ => println!("Not a valid option!"),
        }
    }
    Ok(())
}

fn print_status(store: &TextureStore) {
    println!("Current number of textures in atlas: {}", store.len());
    if let Some(edge) = store.edge() {
        println!("Set width/height: {edge}");
    }
}

fn print_menu() {
    println!("Enter one of the following options:\n");
    println!("a\tAdd image to atlas.");
    println!("g\tGenerate atlas.");
    println!("l\tList current files.");
    println!("q\tQuit.");
}

fn add_image(store: &mut TextureStore) -> Result<()> {
    println!();
    println!("Enter the filename or path.");
    let Some(path) = read_line()? else { return Ok(()) };
    match store.add_file(&path) {
        Ok(tex) => {
            println!("Image width is: {}", tex.width);
            println!("Image height is: {}", tex.height);
        }
        Err(err) => eprintln!("{err}"),
    }
    println!();
    Ok(())
}

fn generate(store: &TextureStore) -> Result<()> {
    println!();
    let built = match atlas::build(store) {
        Ok(a) => a,
        Err(err) => {
            eprintln!("{err}");
            println!();
            return Ok(());
        }
    };
    println!("Generating atlas...");
    println!("Number of textures: {}", store.len());
    println!("Atlas size is: {g}X{g}", g = built.grid);
    println!("Pixel width per texture is: {}", built.tile);
    println!("Enter a file name, preferably ending in .png");
    let Some(name) = read_line()? else { return Ok(()) };
    match built.save_png(&name) {
        Ok(()) => println!("Wrote {dim}x{dim} atlas to {name}", dim = built.dim),
        Err(err) => eprintln!("{err}"),
    }
    println!();
    Ok(())
}

fn list_images(store: &TextureStore) {
    println!();
    if store.is_empty() {
        println!("You have loaded zero images or there was a problem with one you entered.");
    } else {
        println!("Current images loaded:\n");
        for name in store.names() {
            println!("{name}");
        }
    }
    println!();
}

/// One trimmed line from stdin, or `None` at EOF.
fn read_line() -> io::Result<Option<String>> {
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
