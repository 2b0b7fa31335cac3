use leptos::prelude::*;

struct UserRow {
    name: &'static str,
    email: &'static str,
    role: &'static str,
    joined: &'static str,
}

fn seed_users() -> Vec<UserRow> {
    vec![
        UserRow { name: "Admin", email: "admin@gmail.com", role: "Administrator", joined: "2024-01-15" },
        UserRow { name: "Ahmed Hassan", email: "ahmed.hassan@example.com", role: "Customer", joined: "2025-02-03" },
        UserRow { name: "Sarah Smith", email: "sarah.smith@example.com", role: "Customer", joined: "2025-03-18" },
        UserRow { name: "Mohammed Ali", email: "mohammed.ali@example.com", role: "Customer", joined: "2025-04-22" },
        UserRow { name: "Fatima Khan", email: "fatima.khan@example.com", role: "Customer", joined: "2025-05-09" },
        UserRow { name: "Omar Abdullah", email: "omar.abdullah@example.com", role: "Customer", joined: "2025-06-27" },
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn UsersSection() -> impl IntoView {
    view! {
        <div class="content users-section">
            <div class="table-container">
                <table class="table__data users-table">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell">"Joined"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {seed_users().into_iter().map(|user| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{user.name}</td>
                                    <td class="table__cell">{user.email}</td>
                                    <td class="table__cell">{user.role}</td>
                                    <td class="table__cell">{user.joined}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
