fn main() {
    csvtable_lib::run()
}
