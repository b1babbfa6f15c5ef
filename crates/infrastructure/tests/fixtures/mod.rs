#![allow(dead_code)]

/// One answer record as `(kind, owner, data)`.
pub type AnswerFixture = (&'static str, &'static str, &'static str);

#[derive(Debug, Clone)]
pub struct RebindFixture {
    pub name: &'static str,
    pub question: &'static str,
    pub record_type: &'static str,
    pub answers: Vec<AnswerFixture>,
    pub allowed_domains: Vec<&'static str>,
    pub expect_blocked: bool,
}

pub fn load_rebind_fixtures() -> Vec<RebindFixture> {
    vec![
        RebindFixture {
            name: "public_a_record",
            question: "example.com.",
            record_type: "A",
            answers: vec![("A", "example.com.", "93.184.216.34")],
            allowed_domains: vec![],
            expect_blocked: false,
        },
        RebindFixture {
            name: "rfc1918_a_record",
            question: "attacker.example.",
            record_type: "A",
            answers: vec![("A", "attacker.example.", "192.168.0.1")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "cgnat_is_public",
            question: "carrier.example.",
            record_type: "A",
            answers: vec![("A", "carrier.example.", "100.64.0.1")],
            allowed_domains: vec![],
            expect_blocked: false,
        },
        RebindFixture {
            name: "loopback_a_record",
            question: "attacker.example.",
            record_type: "A",
            answers: vec![("A", "attacker.example.", "127.0.0.1")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "documentation_range",
            question: "docs.example.",
            record_type: "A",
            answers: vec![("A", "docs.example.", "203.0.113.5")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "ula_aaaa_record",
            question: "v6.example.",
            record_type: "AAAA",
            answers: vec![("AAAA", "v6.example.", "fd00::1")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "ipv4_mapped_private",
            question: "mapped.example.",
            record_type: "AAAA",
            answers: vec![("AAAA", "mapped.example.", "::ffff:10.0.0.1")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "public_aaaa_record",
            question: "v6.example.",
            record_type: "AAAA",
            answers: vec![("AAAA", "v6.example.", "2001:4860:4860::8888")],
            allowed_domains: vec![],
            expect_blocked: false,
        },
        RebindFixture {
            name: "cname_to_localhost",
            question: "evil.example.",
            record_type: "A",
            answers: vec![("CNAME", "evil.example.", "localhost.")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "cname_chain_to_private",
            question: "a.test.",
            record_type: "A",
            answers: vec![("CNAME", "a.test.", "b.test."), ("A", "b.test.", "192.168.1.1")],
            allowed_domains: vec![],
            expect_blocked: true,
        },
        RebindFixture {
            name: "cname_chain_allow_listed",
            question: "a.test.",
            record_type: "A",
            answers: vec![("CNAME", "a.test.", "b.test."), ("A", "b.test.", "192.168.1.1")],
            allowed_domains: vec!["test"],
            expect_blocked: false,
        },
        RebindFixture {
            name: "allow_list_checks_owner_name",
            question: "nas.lan.",
            record_type: "A",
            answers: vec![("CNAME", "nas.lan.", "nas.evil.example."), ("A", "nas.evil.example.", "10.0.0.2")],
            allowed_domains: vec!["lan."],
            expect_blocked: true,
        },
        RebindFixture {
            name: "txt_only",
            question: "txt.example.",
            record_type: "TXT",
            answers: vec![("TXT", "txt.example.", "10.0.0.1")],
            allowed_domains: vec![],
            expect_blocked: false,
        },
    ]
}
