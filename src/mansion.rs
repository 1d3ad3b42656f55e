//! The shipped mansion: its room layout and which suspect each clue implicates.
use super::*;

/// Clue → suspect bindings, as set by the game designer.
pub const BINDINGS: [(&str, &str); 8] = [
    ("Pegadas sujas perto da janela", "Sr. Black"),
    ("Retrato pendurado torto", "Sra. White"),
    ("Vasilha quebrada no chao", "Jovem Green"),
    ("Livro com anotacoes na margem", "Prof. Plum"),
    ("Caneta com tinta vermelha", "Sra. White"),
    ("Fio de tecido azul", "Jovem Green"),
    ("Chave enferrujada", "Sr. Black"),
    ("Pegadas que levam ao portao", "Sr. Black"),
];

/// Every suspect named by [`BINDINGS`], for prompts.
pub const SUSPECTS: [&str; 4] = ["Sr. Black", "Sra. White", "Jovem Green", "Prof. Plum"];

/// The mansion tree, rooted at the entrance hall.
pub fn layout() -> Room {
    let biblioteca = Room::new("Biblioteca").with_clue("Livro com anotacoes na margem");
    let escritorio = Room::new("Escritorio").with_clue("Caneta com tinta vermelha");
    let quarto = Room::new("Quarto").with_clue("Fio de tecido azul");
    let jardim = Room::new("Jardim").with_clue("Pegadas que levam ao portao");
    let sotao = Room::new("Sotao").with_clue("Chave enferrujada").right(jardim);
    let estar = Room::new("Sala de Estar")
        .with_clue("Retrato pendurado torto")
        .left(biblioteca)
        .right(escritorio);
    let cozinha = Room::new("Cozinha")
        .with_clue("Vasilha quebrada no chao")
        .left(quarto)
        .right(sotao);
    Room::new("Hall de Entrada")
        .with_clue("Pegadas sujas perto da janela")
        .left(estar)
        .right(cozinha)
}
