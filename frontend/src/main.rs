fn main() {
    leavedesk_frontend::start();
}
