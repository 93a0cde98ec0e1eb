use sqlego::{Row, between, delete, eq, explicit, gte, insert_row, lt, select, update};

fn main() -> sqlego::Result<()> {
    let mut users = select("Users", ["id", "name", "email"]);
    users.where_([
        gte("id", "1"),
        explicit([gte("id", "10"), lt("id", "20")]).or(lt("id", "5")),
        between("id", "100", "200"),
    ]);
    println!("{}", users.compile());

    let mut row = Row::new();
    row.field("name", "'Bruce'").field("email", "'bruce@wayne.com'");
    println!("{}", insert_row("Users", row).compile());

    let sql = update("Users", ["name"], ["'Batman'"])?
        .where_(eq("name", "'Bruce'"))
        .compile();
    println!("{}", sql);

    println!("{}", delete("Users").where_(lt("id", "0")).compile());

    Ok(())
}
