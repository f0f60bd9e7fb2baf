use solana_security_txt::security_txt;

security_txt! {
    name: "GGWP core program",
    project_url: "https://github.com/ggwplabs/solana-sc",
    contacts: "link:https://github.com/ggwplabs/solana-sc/issues",
    policy: "https://github.com/ggwplabs/solana-sc/security",
    source_code: "https://github.com/ggwplabs/solana-sc"
}
