pub mod montgomery_backed_prime_fields;
